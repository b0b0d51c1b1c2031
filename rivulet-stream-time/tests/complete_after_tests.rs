// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Utc;
use rivulet_stream::prelude::*;
use rivulet_stream_time::prelude::*;
use rivulet_test_utils::Recorder;
use std::time::Duration;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_complete_after_completes_once_duration_elapses() {
    // Arrange
    pause();
    let source = Emitter::<i32>::new();
    let recorder = Recorder::attach(&source);
    source.complete_after(Duration::from_millis(200));

    // Act & Assert
    sleep(Duration::from_millis(100)).await;
    source.emit(1);
    assert!(!source.is_completed());

    sleep(Duration::from_millis(150)).await;
    source.emit(2);
    assert!(source.is_completed());
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(recorder.completions(), 1);
}

#[tokio::test]
async fn test_complete_at_in_the_past_completes_promptly() {
    // Arrange
    pause();
    let source = Emitter::<i32>::new();

    // Act
    source.complete_at(Utc::now() - chrono::Duration::seconds(1));
    sleep(Duration::from_millis(1)).await;

    // Assert
    assert!(source.is_completed());
}

#[tokio::test]
async fn test_complete_after_is_harmless_on_early_completion() {
    // Arrange
    pause();
    let source = Emitter::<i32>::new();
    let recorder = Recorder::attach(&source);
    source.complete_after(Duration::from_millis(100));

    // Act
    source.complete();
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert_eq!(recorder.completions(), 1);
}
