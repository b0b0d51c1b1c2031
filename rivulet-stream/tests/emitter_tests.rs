// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::prelude::*;
use rivulet_test_utils::Recorder;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_new_emitter_is_active_without_value() {
    // Arrange
    let emitter = Emitter::<i32>::new();

    // Assert
    assert_eq!(emitter.value(), None);
    assert!(!emitter.has_value());
    assert!(!emitter.is_completed());
    assert_eq!(emitter.listener_count(), 0);
}

#[test]
fn test_initial_value_is_readable_before_any_emission() {
    // Arrange
    let emitter = Emitter::initial("ready");

    // Assert
    assert_eq!(emitter.value(), Some("ready"));
    assert_eq!(emitter.raw_value(), Some("ready"));
    assert_eq!(emitter.default_value(), None);
}

#[test]
fn test_emit_and_clear_reach_every_subscriber() {
    // Arrange
    let emitter = Emitter::new();
    let first = Recorder::attach(&emitter);
    let second = Recorder::attach(&emitter);

    // Act
    emitter.emit(1);
    emitter.clear();
    emitter.emit(2);

    // Assert
    assert_eq!(first.deliveries(), vec![Some(1), None, Some(2)]);
    assert_eq!(second.deliveries(), vec![Some(1), None, Some(2)]);
    assert_eq!(emitter.value(), Some(2));
}

#[test]
fn test_default_stands_in_for_absent_value() {
    // Arrange
    let emitter = Emitter::with_default(0);
    let recorder = Recorder::attach(&emitter);

    // Act & Assert
    assert_eq!(emitter.value(), Some(0));
    assert_eq!(emitter.raw_value(), None);

    emitter.emit(5);
    assert_eq!(emitter.value(), Some(5));

    emitter.clear();
    assert_eq!(emitter.value(), Some(0));
    assert_eq!(emitter.raw_value(), None);
    assert_eq!(recorder.deliveries(), vec![Some(5), Some(0)]);
}

#[test]
fn test_set_and_clear_default_republish_effective_value() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);

    // Act
    emitter.set_default(3);
    emitter.emit(1);
    emitter.clear_default();
    emitter.clear();

    // Assert
    assert_eq!(
        recorder.deliveries(),
        vec![Some(3), Some(1), Some(1), None]
    );
    assert_eq!(emitter.default_value(), None);
}

#[test]
fn test_complete_notifies_once_and_freezes_value() {
    // Arrange
    let emitter = Emitter::initial(1);
    let recorder = Recorder::attach(&emitter);

    // Act
    emitter.complete();
    emitter.complete();
    emitter.emit(2);
    emitter.clear();
    emitter.set_default(7);

    // Assert
    assert!(emitter.is_completed());
    assert_eq!(recorder.completions(), 1);
    assert!(recorder.is_empty());
    assert_eq!(emitter.value(), Some(1));
    assert_eq!(emitter.listener_count(), 0);
}

#[test]
fn test_subscribing_to_completed_emitter_runs_completion_immediately() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    emitter.complete();
    let completed = Arc::new(AtomicUsize::new(0));
    let counter = completed.clone();

    // Act
    let subscription = emitter.on_complete(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Assert
    assert_eq!(completed.load(Ordering::SeqCst), 1);
    assert!(!subscription.is_active());
}

#[test]
fn test_emit_if_distinct_skips_current_value() {
    // Arrange
    let emitter = Emitter::initial(4);
    let recorder = Recorder::attach(&emitter);

    // Act
    emitter.emit_if_distinct(4);
    emitter.emit_if_distinct(5);
    emitter.emit_if_distinct(5);

    // Assert
    assert_eq!(recorder.deliveries(), vec![Some(5)]);
}

#[test]
fn test_cancelled_subscription_stops_deliveries() {
    // Arrange
    let emitter = Emitter::new();
    let recorder = Recorder::attach(&emitter);
    let other = Recorder::attach(&emitter);

    // Act
    emitter.emit(1);
    recorder.detach();
    emitter.emit(2);

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(other.values(), vec![1, 2]);
    assert_eq!(emitter.listener_count(), 1);
}

#[test]
fn test_listener_may_emit_into_the_delivering_emitter() {
    // Arrange
    let emitter = Emitter::new();
    let echo = emitter.clone();
    emitter.subscribe(move |value| {
        if *value == Some(1) {
            echo.emit(2);
        }
    });
    let recorder = Recorder::attach(&emitter);

    // Act
    emitter.emit(1);

    // Assert
    assert_eq!(emitter.value(), Some(2));
    assert_eq!(recorder.deliveries(), vec![Some(2), Some(1)]);
}

#[test]
fn test_observable_shares_the_emitter_stream() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let observable: Observable<i32> = emitter.clone().into();
    let recorder = Recorder::attach(&observable);

    // Act
    emitter.emit(8);
    emitter.complete();

    // Assert
    assert_eq!(observable.value(), Some(8));
    assert!(observable.is_completed());
    assert_eq!(recorder.values(), vec![8]);
    assert_eq!(recorder.completions(), 1);
}

#[test]
fn test_cloned_handle_writes_to_the_same_stream() {
    // Arrange
    let emitter = Emitter::new();
    let handle = emitter.clone();

    // Act
    handle.emit("shared");

    // Assert
    assert_eq!(emitter.value(), Some("shared"));
}

#[test]
fn test_concurrent_emitters_deliver_every_value() {
    // Arrange
    let emitter = Emitter::<i32>::new();
    let recorder = Recorder::attach(&emitter);

    // Act
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let emitter = emitter.clone();
            scope.spawn(move || {
                for i in 0..100 {
                    emitter.emit(worker * 100 + i);
                }
            });
        }
    });

    // Assert
    let mut values = recorder.values();
    values.sort_unstable();
    assert_eq!(values, (0..400).collect::<Vec<_>>());
}
