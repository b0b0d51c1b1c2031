// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(all(feature = "time", feature = "runtime-tokio"))]

use rivulet::prelude::*;
use rivulet_test_utils::{collect_within, Recorder};
use std::time::Duration;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_bridged_iterator_batches_with_trailing_remainder() -> anyhow::Result<()> {
    // Arrange
    let source = Emitter::from_iter(vec![1, 2, 3]);

    // Act
    let batches = source.batch(2).to_vec().await?;

    // Assert
    assert_eq!(batches, vec![vec![1, 2], vec![3]]);
    Ok(())
}

#[tokio::test]
async fn test_debounced_search_box() {
    // Arrange
    pause();
    let query = Emitter::<String>::new();
    let searches = query
        .map(|text| text.trim().to_lowercase())
        .filter(|text| text.len() >= 3)
        .debounce(Duration::from_millis(300))
        .distinct_until_changed();
    let recorder = Recorder::attach(&searches);

    // Act
    for text in ["ru", "rus", "rust", "Rust "] {
        query.emit(text.to_string());
        sleep(Duration::from_millis(50)).await;
    }
    sleep(Duration::from_millis(400)).await;
    query.emit("rust".to_string());
    sleep(Duration::from_millis(400)).await;
    query.complete();
    sleep(Duration::from_millis(1)).await;

    // Assert
    assert_eq!(recorder.values(), vec!["rust".to_string()]);
    assert!(searches.is_completed());
}

#[tokio::test]
async fn test_ticks_until_completion_deadline() {
    // Arrange
    pause();
    let ticks = TokioTimer.every(Duration::from_millis(100));
    ticks.complete_after(Duration::from_millis(350));

    // Act
    let values = collect_within(&ticks, 1_000).await;

    // Assert
    assert_eq!(values, vec![0, 1, 2]);
}
