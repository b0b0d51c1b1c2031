// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::prelude::*;
use rivulet_test_utils::Recorder;

#[test]
fn test_merge_forwards_every_source() {
    // Arrange
    let left = Emitter::<i32>::new();
    let right = Emitter::<i32>::new();
    let merged = merge([left.clone(), right.clone()]);
    let recorder = Recorder::attach(&merged);

    // Act
    left.emit(1);
    right.emit(2);
    left.clear();
    right.emit(3);

    // Assert
    assert_eq!(recorder.deliveries(), vec![Some(1), Some(2), None, Some(3)]);
}

#[test]
fn test_merge_completes_when_every_source_has_completed() {
    // Arrange
    let sources: Vec<Emitter<i32>> = (0..3).map(|_| Emitter::new()).collect();
    let merged = merge(sources.clone());

    // Act & Assert
    sources[0].complete();
    sources[0].complete();
    sources[1].complete();
    assert!(!merged.is_completed());

    sources[2].complete();
    assert!(merged.is_completed());
}

#[test]
fn test_merge_of_nothing_is_completed() {
    // Act
    let merged = merge(Vec::<Emitter<i32>>::new());

    // Assert
    assert!(merged.is_completed());
}

#[test]
fn test_merge_accepts_observables() {
    // Arrange
    let emitter = Emitter::<&str>::new();
    let derived = emitter.map(|s| s.len());
    let merged = Emitter::merge([derived.as_observable(), Emitter::initial(0).as_observable()]);

    // Act
    emitter.emit("four");

    // Assert
    assert_eq!(merged.value(), Some(4));
}

#[test]
fn test_completed_merge_detaches_from_sources() {
    // Arrange
    let left = Emitter::<i32>::new();
    let right = Emitter::<i32>::new();
    let merged = merge([left.clone(), right.clone()]);

    // Act
    merged.complete();

    // Assert
    assert_eq!(left.listener_count(), 0);
    assert_eq!(right.listener_count(), 0);
}
