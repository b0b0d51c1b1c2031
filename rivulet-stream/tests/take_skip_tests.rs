// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::prelude::*;
use rivulet_test_utils::Recorder;

fn emit_all(source: &Emitter<i32>, values: &[i32]) {
    for value in values {
        source.emit(*value);
    }
}

#[test]
fn test_take_delivers_first_values_then_completes() {
    // Arrange
    let source = Emitter::<i32>::new();
    let taken = source.take(2);
    let recorder = Recorder::attach(&taken);

    // Act
    emit_all(&source, &[1, 2, 3]);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert_eq!(recorder.completions(), 1);
    assert!(!source.is_completed());
}

#[test]
fn test_take_zero_is_completed_immediately() {
    // Arrange
    let source = Emitter::<i32>::new();

    // Act
    let taken = source.take(0);

    // Assert
    assert!(taken.is_completed());
}

#[test]
fn test_take_completes_early_with_source() {
    // Arrange
    let source = Emitter::<i32>::new();
    let taken = source.take(5);

    // Act
    emit_all(&source, &[1]);
    source.complete();

    // Assert
    assert!(taken.is_completed());
    assert_eq!(taken.value(), Some(1));
}

#[test]
fn test_skip_drops_first_values_and_clears_before_gate_opens() {
    // Arrange
    let source = Emitter::<i32>::new();
    let skipped = source.skip(1);
    let recorder = Recorder::attach(&skipped);

    // Act
    source.clear();
    source.emit(1);
    source.emit(2);
    source.clear();

    // Assert
    assert_eq!(recorder.deliveries(), vec![Some(2), None]);
}

#[test]
fn test_take_while_completes_at_first_failing_value() {
    // Arrange
    let source = Emitter::<i32>::new();
    let taken = source.take_while(|x| *x < 3);
    let recorder = Recorder::attach(&taken);

    // Act
    emit_all(&source, &[1, 2, 3, 1]);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert!(taken.is_completed());
}

#[test]
fn test_skip_while_opens_at_first_failing_value() {
    // Arrange
    let source = Emitter::<i32>::new();
    let skipped = source.skip_while(|x| *x < 3);
    let recorder = Recorder::attach(&skipped);

    // Act
    emit_all(&source, &[1, 2, 3, 1]);

    // Assert
    assert_eq!(recorder.values(), vec![3, 1]);
}

#[test]
fn test_take_until_stops_at_first_matching_value() {
    // Arrange
    let source = Emitter::<i32>::new();
    let taken = source.take_until(|x| *x == 3);
    let recorder = Recorder::attach(&taken);

    // Act
    emit_all(&source, &[1, 2, 3, 4]);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert!(taken.is_completed());
}

#[test]
fn test_skip_until_starts_at_first_matching_value() {
    // Arrange
    let source = Emitter::<i32>::new();
    let skipped = source.skip_until(|x| *x == 3);
    let recorder = Recorder::attach(&skipped);

    // Act
    emit_all(&source, &[1, 2, 3, 4]);

    // Assert
    assert_eq!(recorder.values(), vec![3, 4]);
}
