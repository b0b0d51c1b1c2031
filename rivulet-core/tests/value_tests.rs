// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{ResultExt, RivuletError, ValueExt};
use std::cell::Cell;

#[test]
fn test_match_with_dispatches_on_presence() {
    assert_eq!(Some(3).match_with(|v| v * 2, || -1), 6);
    assert_eq!(None::<i32>.match_with(|v| v * 2, || -1), -1);
}

#[test]
fn test_if_present_only_runs_for_present_values() {
    let calls = Cell::new(0);
    Some(1).if_present(|_| calls.set(calls.get() + 1));
    None::<i32>.if_present(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_or_else_throw_reports_missing_value() {
    // Act
    let err = None::<i32>.or_else_throw("temperature").unwrap_err();

    // Assert
    assert!(err.is_missing_value());
    assert_eq!(err.context(), "temperature");
    assert_eq!(err.to_string(), "Missing value: temperature");
    assert_eq!(Some(7).or_else_throw("temperature"), Ok(7));
}

#[test]
#[should_panic(expected = "Missing value: pressure")]
fn test_or_else_panic_panics_when_absent() {
    let _ = None::<i32>.or_else_panic("pressure");
}

#[test]
fn test_result_context_prefixes_message() {
    // Arrange
    let result: rivulet_core::Result<i32> = Err(RivuletError::missing_value("inner"));

    // Act
    let err = result.context("reading sensor").unwrap_err();

    // Assert
    assert_eq!(err.context(), "reading sensor: inner");
}

#[test]
fn test_with_context_is_lazy_on_ok() {
    let result: rivulet_core::Result<i32> = Ok(1);
    let value = result
        .with_context(|| panic!("context must not be built for Ok"))
        .unwrap();
    assert_eq!(value, 1);
}
