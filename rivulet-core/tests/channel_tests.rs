// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rivulet_core::{Channel, Subscription};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn recorder() -> (Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    (log.clone(), log)
}

#[test]
fn test_publish_reaches_listeners_in_registration_order() {
    // Arrange
    let channel = Channel::<i32>::new();
    let (log, sink) = recorder();
    let first = sink.clone();
    let second = sink.clone();
    channel.listen(move |v| first.lock().push(format!("first:{v}")), None);
    channel.listen(move |v| second.lock().push(format!("second:{v}")), None);

    // Act
    channel.publish(&1);
    channel.publish(&2);

    // Assert
    assert_eq!(
        *log.lock(),
        vec!["first:1", "second:1", "first:2", "second:2"]
    );
}

#[test]
fn test_cancelled_listener_stops_receiving() {
    // Arrange
    let channel = Channel::<i32>::new();
    let (log, sink) = recorder();
    let cancelled = sink.clone();
    let kept = sink.clone();
    let subscription = channel.listen(move |v| cancelled.lock().push(format!("a:{v}")), None);
    channel.listen(move |v| kept.lock().push(format!("b:{v}")), None);

    // Act
    channel.publish(&1);
    subscription.cancel();
    channel.publish(&2);

    // Assert
    assert!(!subscription.is_active());
    assert_eq!(channel.listener_count(), 1);
    assert_eq!(*log.lock(), vec!["a:1", "b:1", "b:2"]);
}

#[test]
fn test_listener_registered_during_publish_misses_that_publish() {
    // Arrange
    let channel = Arc::new(Channel::<i32>::new());
    let late_calls = Arc::new(AtomicUsize::new(0));
    let registered = Arc::new(AtomicUsize::new(0));

    let inner_channel = channel.clone();
    let inner_calls = late_calls.clone();
    let inner_registered = registered.clone();
    channel.listen(
        move |_| {
            if inner_registered.fetch_add(1, Ordering::SeqCst) == 0 {
                let calls = inner_calls.clone();
                inner_channel.listen(
                    move |_| {
                        calls.fetch_add(1, Ordering::SeqCst);
                    },
                    None,
                );
            }
        },
        None,
    );

    // Act
    channel.publish(&1);

    // Assert
    assert_eq!(late_calls.load(Ordering::SeqCst), 0);

    channel.publish(&2);
    assert_eq!(late_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listener_cancelled_mid_publish_is_skipped() {
    // Arrange
    let channel = Channel::<i32>::new();
    let (log, sink) = recorder();
    let victim = Arc::new(Mutex::new(None::<Subscription>));

    let killer_victim = victim.clone();
    channel.listen(
        move |_| {
            if let Some(subscription) = killer_victim.lock().as_ref() {
                subscription.cancel();
            }
        },
        None,
    );
    let victim_sink = sink.clone();
    let subscription = channel.listen(move |v| victim_sink.lock().push(format!("victim:{v}")), None);
    *victim.lock() = Some(subscription);

    // Act
    channel.publish(&1);

    // Assert
    assert!(log.lock().is_empty());
}

#[test]
fn test_close_fires_completion_once_and_rejects_late_listeners() {
    // Arrange
    let channel = Channel::<i32>::new();
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = completions.clone();
    let subscription = channel.listen(
        |_| {},
        Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    // Act
    channel.close();
    channel.close();

    // Assert
    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert!(channel.is_closed());
    assert!(!subscription.is_active());

    let late = completions.clone();
    let late_subscription = channel.listen(
        |_| panic!("closed channel must not deliver"),
        Some(Box::new(move || {
            late.fetch_add(1, Ordering::SeqCst);
        })),
    );
    channel.publish(&5);
    assert_eq!(completions.load(Ordering::SeqCst), 2);
    assert!(!late_subscription.is_active());
    assert_eq!(channel.listener_count(), 0);
}

#[test]
fn test_publish_never_removes_listeners() {
    // Arrange
    let channel = Channel::<i32>::new();
    channel.listen(|_| {}, None);
    channel.listen(|_| {}, None);

    // Act
    for i in 0..10 {
        channel.publish(&i);
    }

    // Assert
    assert_eq!(channel.listener_count(), 2);
}
