//! Calling-convention bridge tests

use std::sync::Arc;

use sol_sdk::bridge::{bridge, bridge_with, BridgeViolation, Completion, ViolationHook};
use sol_sdk::{Api, SdkError};
use tokio::sync::mpsc;

/// Hook that forwards every violation to the test instead of aborting
fn channel_hook() -> (ViolationHook, mpsc::UnboundedReceiver<BridgeViolation>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let hook: ViolationHook = Arc::new(move |v| {
        let _ = tx.send(v);
    });
    (hook, rx)
}

/// Stub in the facade's callback style that fires its callback twice
fn resolves_twice(c: Completion<u64>) {
    let again = c.clone();
    c.resolve(Ok(1));
    again.resolve(Ok(2));
}

// ==================== Violations ====================

#[tokio::test]
async fn test_double_resolution_is_reported() {
    let (hook, mut violations) = channel_hook();
    let result = bridge_with(hook, resolves_twice).await;
    assert_eq!(result, Ok(1));
    assert_eq!(violations.recv().await, Some(BridgeViolation::ResolvedTwice));
}

#[tokio::test]
async fn test_double_resolution_from_spawned_task_is_reported() {
    let (hook, mut violations) = channel_hook();
    let result = bridge_with(hook, |c: Completion<u64>| {
        tokio::spawn(async move {
            c.resolve(Ok(1));
            tokio::task::yield_now().await;
            c.resolve(Ok(2));
        });
    })
    .await;
    assert_eq!(result, Ok(1));
    assert_eq!(violations.recv().await, Some(BridgeViolation::ResolvedTwice));
}

#[tokio::test]
async fn test_double_resolution_inside_facade_callback_is_reported() {
    let api = Api::new_mock();
    let (hook, mut violations) = channel_hook();
    let result = bridge_with(hook, |c| {
        api.get_slot_with(None, move |r: Result<u64, SdkError>| {
            c.resolve(r.clone());
            c.resolve(r);
        })
    })
    .await;
    assert_eq!(result, Ok(256));
    assert_eq!(violations.recv().await, Some(BridgeViolation::ResolvedTwice));
}

#[tokio::test]
async fn test_dropped_completion_is_reported() {
    let (hook, mut violations) = channel_hook();
    // Simulates an operation that discards its completion
    let waiter = tokio::spawn(bridge_with(hook, |c: Completion<u64>| {
        std::thread::spawn(move || drop(c));
    }));
    assert_eq!(violations.recv().await, Some(BridgeViolation::NeverResolved));
    assert!(waiter.await.unwrap_err().is_panic());
}

#[test]
fn test_violation_messages() {
    assert!(BridgeViolation::ResolvedTwice
        .to_string()
        .contains("resolved more than once"));
    assert!(BridgeViolation::NeverResolved
        .to_string()
        .contains("without resolving"));
}

// ==================== Facade Callbacks ====================

#[tokio::test]
async fn test_bridge_over_facade_callback() {
    let api = Api::new_mock();
    let slot = bridge(|c| api.get_slot_with(None, c.into_callback())).await;
    assert_eq!(slot, Ok(256));
}

#[tokio::test]
async fn test_bridge_propagates_facade_failure() {
    let api = Api::new_mock();
    let result = bridge(|c| api.get_block_time_with(1, c.into_callback())).await;
    assert!(matches!(result, Err(SdkError::Rpc { code: -32601, .. })));
}

#[tokio::test]
async fn test_concurrent_bridges_resolve_independently() {
    let api = Api::new_mock();
    let (a, b) = tokio::join!(
        bridge(|c| api.get_slot_with(None, c.into_callback())),
        bridge(|c| api.get_epoch_info_with(None, c.into_callback())),
    );
    assert_eq!(a, Ok(256));
    assert_eq!(b.unwrap().epoch, 0);
}
