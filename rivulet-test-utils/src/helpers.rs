// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::prelude::*;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::timeout;

/// Awaits the next present value of `source`, panicking after `timeout_ms`.
///
/// With a paused clock the timeout only elapses once nothing else can run, so
/// timer-driven operators get to fire first.
pub async fn expect_next<O>(source: &O, timeout_ms: u64) -> O::Item
where
    O: Observe,
{
    match timeout(Duration::from_millis(timeout_ms), source.next()).await {
        Ok(Ok(value)) => value,
        Ok(Err(error)) => panic!("expected a value, stream ended: {error}"),
        Err(_) => panic!("expected a value within {timeout_ms}ms"),
    }
}

/// Asserts that `source` delivers no present value within `timeout_ms`.
pub async fn assert_no_value_emitted<O>(source: &O, timeout_ms: u64)
where
    O: Observe,
    O::Item: Debug,
{
    if let Ok(Ok(value)) = timeout(Duration::from_millis(timeout_ms), source.next()).await {
        panic!("Unexpected value emitted: {value:?}, expected no output.");
    }
}

/// Awaits every present value of `source` until it completes, panicking after `timeout_ms`.
pub async fn collect_within<O>(source: &O, timeout_ms: u64) -> Vec<O::Item>
where
    O: Observe,
{
    match timeout(Duration::from_millis(timeout_ms), source.to_vec()).await {
        Ok(Ok(values)) => values,
        Ok(Err(error)) => panic!("stream ended without completing: {error}"),
        Err(_) => panic!("stream did not complete within {timeout_ms}ms"),
    }
}
