// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream::prelude::*;
use rivulet_stream_time::prelude::*;
use rivulet_test_utils::Recorder;
use std::time::Duration;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_throttle_forwards_at_most_one_value_per_window() {
    // Arrange
    pause();
    let source = Emitter::<i32>::new();
    let throttled = source.throttle(Duration::from_millis(100));
    let recorder = Recorder::attach(&throttled);

    // Act
    source.emit(1);
    sleep(Duration::from_millis(50)).await;
    source.emit(2);
    sleep(Duration::from_millis(70)).await;
    source.emit(3);
    sleep(Duration::from_millis(30)).await;
    source.emit(4);

    // Assert
    assert_eq!(recorder.values(), vec![1, 3]);
}

#[tokio::test]
async fn test_throttle_dropped_values_do_not_extend_window() {
    // Arrange
    pause();
    let source = Emitter::<i32>::new();
    let throttled = source.throttle(Duration::from_millis(100));
    let recorder = Recorder::attach(&throttled);

    // Act
    for value in 0..5 {
        source.emit(value);
        sleep(Duration::from_millis(30)).await;
    }

    // Assert
    assert_eq!(recorder.values(), vec![0, 4]);
}

#[tokio::test]
async fn test_throttle_forwards_completion_immediately() {
    // Arrange
    let source = Emitter::<i32>::new();
    let throttled = source.throttle(Duration::from_secs(1));
    let recorder = Recorder::attach(&throttled);

    // Act
    source.emit(1);
    source.complete();

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(recorder.completions(), 1);
}
