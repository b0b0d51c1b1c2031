// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use futures::stream::{self, StreamExt};
use rivulet_stream::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

const WAIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_from_iter_emits_items_then_completes() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_iter(vec![1, 2, 3]);

    // Act
    let all = source.to_vec();

    // Assert
    assert_eq!(timeout(WAIT, all).await??, vec![1, 2, 3]);
    assert!(source.is_completed());
    Ok(())
}

#[tokio::test]
async fn test_from_iter_feeds_synchronous_wiring_done_after_construction() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_iter(vec![1, 2, 3]);

    // Act
    let pairs = source.batch(2).to_vec();

    // Assert
    assert_eq!(timeout(WAIT, pairs).await??, vec![vec![1, 2], vec![3]]);
    Ok(())
}

#[tokio::test]
async fn test_from_future_emits_its_output() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_future(async {
        sleep(Duration::from_millis(10)).await;
        "ready"
    });

    // Act
    let next = source.next();

    // Assert
    assert_eq!(timeout(WAIT, next).await??, "ready");
    Ok(())
}

#[tokio::test]
async fn test_from_futures_emits_every_output() -> anyhow::Result<()> {
    // Arrange
    let delays = [30_u64, 10, 20];
    let source = Emitter::from_futures(delays.into_iter().map(|ms| async move {
        sleep(Duration::from_millis(ms)).await;
        ms
    }));

    // Act
    let mut all = timeout(WAIT, source.to_vec()).await??;

    // Assert
    all.sort_unstable();
    assert_eq!(all, vec![10, 20, 30]);
    Ok(())
}

#[tokio::test]
async fn test_from_stream_of_nothing_completes() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_stream(stream::empty::<i32>());

    // Act
    let result = timeout(WAIT, source.next()).await?;

    // Assert
    assert!(result.unwrap_err().is_missing_value());
    Ok(())
}

#[tokio::test]
async fn test_from_streams_merges_all_items() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_streams(vec![
        stream::iter(vec![1, 3]).boxed(),
        stream::iter(vec![2, 4]).boxed(),
    ]);

    // Act
    let mut all = timeout(WAIT, source.to_vec()).await??;

    // Assert
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn test_completing_bridged_emitter_stops_the_stream() -> anyhow::Result<()> {
    // Arrange
    let produced = Arc::new(AtomicUsize::new(0));
    let counter = produced.clone();
    let source = Emitter::from_stream(stream::iter(0..).then(move |n| {
        let counter = counter.clone();
        async move {
            sleep(Duration::from_millis(5)).await;
            counter.fetch_add(1, Ordering::SeqCst);
            n
        }
    }));
    let first_three = source.take(3).to_vec();
    assert_eq!(timeout(WAIT, first_three).await??, vec![0, 1, 2]);

    // Act
    source.complete();
    let at_completion = produced.load(Ordering::SeqCst);
    sleep(Duration::from_millis(50)).await;

    // Assert
    assert!(produced.load(Ordering::SeqCst) <= at_completion + 1);
    assert_eq!(source.value(), Some(2));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_from_iter_delivers_everything_on_a_multi_thread_runtime() -> anyhow::Result<()> {
    for _ in 0..200 {
        // Arrange
        let source = Emitter::from_iter(vec![1, 2, 3]);

        // Act
        let all = source.to_vec();

        // Assert
        assert_eq!(timeout(WAIT, all).await??, vec![1, 2, 3]);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batching_a_bridged_iterator_on_a_multi_thread_runtime() -> anyhow::Result<()> {
    for _ in 0..200 {
        // Arrange
        let source = Emitter::from_iter(vec![1, 2, 3]);

        // Act
        let batches = source.batch(2).to_vec();

        // Assert
        assert_eq!(timeout(WAIT, batches).await??, vec![vec![1, 2], vec![3]]);
    }
    Ok(())
}

#[tokio::test]
async fn test_bridge_waits_for_its_first_listener() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_iter(vec![1, 2, 3]);
    sleep(Duration::from_millis(20)).await;
    assert!(!source.is_completed());

    // Act
    let all = source.to_vec();

    // Assert
    assert_eq!(timeout(WAIT, all).await??, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_derived_emitter_passes_demand_to_its_bridge() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_iter(vec![1, 2, 3]);
    let batches = source.batch(2);
    sleep(Duration::from_millis(20)).await;
    assert!(!source.is_completed());

    // Act
    let all = batches.to_vec();

    // Assert
    assert_eq!(timeout(WAIT, all).await??, vec![vec![1, 2], vec![3]]);
    Ok(())
}
