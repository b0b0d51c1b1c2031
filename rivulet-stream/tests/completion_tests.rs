// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::prelude::*;
use rivulet_test_utils::Recorder;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_complete_in_trips_on_the_emission_after_count() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);
    emitter.complete_in(2);

    // Act
    emitter.emit(10);
    emitter.emit(20);
    emitter.emit(30);

    // Assert
    assert_eq!(recorder.values(), vec![10, 20]);
    assert_eq!(recorder.completions(), 1);
    assert_eq!(emitter.value(), Some(20));
}

#[test]
fn test_complete_in_zero_completes_on_first_emission() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);
    emitter.complete_in(0);

    // Act
    emitter.emit(1);

    // Assert
    assert!(emitter.is_completed());
    assert!(recorder.is_empty());
    assert_eq!(emitter.value(), None);
}

#[test]
fn test_complete_when_completes_instead_of_delivering_match() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);
    emitter.complete_when(|x: &i32| *x > 3);

    // Act
    emitter.emit(1);
    emitter.clear();
    emitter.emit(5);
    emitter.emit(2);

    // Assert
    assert_eq!(recorder.deliveries(), vec![Some(1), None]);
    assert!(emitter.is_completed());
}

#[test]
fn test_complete_when_not_completes_on_first_failing_value() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);
    emitter.complete_when_not(|x: &i32| x % 2 == 0);

    // Act
    emitter.emit(2);
    emitter.emit(4);
    emitter.emit(5);

    // Assert
    assert_eq!(recorder.values(), vec![2, 4]);
    assert!(emitter.is_completed());
}

#[test]
fn test_complete_once_empty_completes_on_clear() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);
    emitter.complete_once_empty();

    // Act
    emitter.emit("a");
    emitter.clear();

    // Assert
    assert_eq!(recorder.deliveries(), vec![Some("a")]);
    assert!(emitter.is_completed());
    assert_eq!(emitter.value(), Some("a"));
}

#[test]
fn test_last_installed_completion_predicate_wins() {
    // Arrange
    let emitter = Emitter::new();
    emitter.complete_when(|x: &i32| *x == 1);
    emitter.complete_when(|x: &i32| *x == 2);

    // Act & Assert
    emitter.emit(1);
    assert!(!emitter.is_completed());

    emitter.emit(2);
    assert!(emitter.is_completed());
    assert_eq!(emitter.value(), Some(1));
}

#[test]
fn test_complete_with_follows_other_completion_but_not_its_values() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let other = Emitter::new();
    emitter.complete_with(&other);

    // Act & Assert
    other.emit("ignored");
    assert_eq!(emitter.value(), None);
    assert!(!emitter.is_completed());

    other.complete();
    assert!(emitter.is_completed());
}

#[test]
fn test_complete_with_already_completed_other_completes_immediately() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let other = Emitter::<i32>::new();
    other.complete();

    // Act
    emitter.complete_with(&other);

    // Assert
    assert!(emitter.is_completed());
}

#[test]
fn test_teardown_runs_once_after_completion() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    emitter.add_teardown(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Act
    emitter.complete();
    emitter.complete();

    // Assert
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_teardown_added_after_completion_runs_immediately() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    emitter.complete();
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();

    // Act
    emitter.add_teardown(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Assert
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}
