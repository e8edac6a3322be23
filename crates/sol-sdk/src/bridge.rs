//! Adapts callback-style operations to `async`.
//!
//! Every facade call resolves exactly once through a callback. [`bridge`]
//! turns such an operation into a future. Resolving zero or several times is
//! a defect in the operation, not a condition callers can recover from, so
//! [`bridge`] aborts the process on either. The violation is reported the
//! same way whether it happens in the awaiting task or in a detached one.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::oneshot;

use crate::SdkError;

/// Broken single-resolution contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeViolation {
    /// Every completion handle was dropped without resolving
    #[error("bridge protocol violation: operation completed without resolving")]
    NeverResolved,
    /// A completion handle was resolved more than once
    #[error("bridge protocol violation: operation resolved more than once")]
    ResolvedTwice,
}

/// Called on every protocol violation, from whichever task detects it
pub type ViolationHook = Arc<dyn Fn(BridgeViolation) + Send + Sync>;

/// Hook used by [`bridge`]: log the violation, then abort
pub fn abort_on_violation(violation: BridgeViolation) {
    tracing::error!(%violation, "aborting");
    std::process::abort();
}

type Sender<T> = oneshot::Sender<Result<T, SdkError>>;

/// Resolution handle passed to a bridged operation.
///
/// Clones share one slot; the first `resolve` wins and any later one is a
/// [`BridgeViolation::ResolvedTwice`].
pub struct Completion<T> {
    slot: Arc<Mutex<Option<Sender<T>>>>,
    on_violation: ViolationHook,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            on_violation: Arc::clone(&self.on_violation),
        }
    }
}

impl<T> Completion<T> {
    fn new(sender: Sender<T>, on_violation: ViolationHook) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(sender))),
            on_violation,
        }
    }

    /// Deliver the result to the waiting caller.
    ///
    /// A second call reports [`BridgeViolation::ResolvedTwice`] to the hook
    /// and drops `result`.
    pub fn resolve(&self, result: Result<T, SdkError>) {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        match sender {
            // The caller may have stopped waiting; the result is dropped then
            Some(sender) => {
                let _ = sender.send(result);
            }
            None => (self.on_violation)(BridgeViolation::ResolvedTwice),
        }
    }

    /// Whether a result has already been delivered
    pub fn is_resolved(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_none()
    }

    /// Convert into a plain one-shot callback
    pub fn into_callback(self) -> impl FnOnce(Result<T, SdkError>) + Send + 'static
    where
        T: Send + 'static,
    {
        move |result| self.resolve(result)
    }
}

/// Run a callback-style operation and wait for its single resolution.
///
/// The operation is started immediately. There is no timeout here; the
/// transport owns that. Any [`BridgeViolation`] aborts the process.
pub async fn bridge<T, Op>(op: Op) -> Result<T, SdkError>
where
    Op: FnOnce(Completion<T>),
{
    bridge_with(Arc::new(abort_on_violation), op).await
}

/// [`bridge`] with a caller-supplied violation hook.
///
/// # Panics
///
/// If every [`Completion`] is dropped unresolved and `on_violation` returns,
/// the awaiting caller panics with [`BridgeViolation::NeverResolved`].
pub async fn bridge_with<T, Op>(on_violation: ViolationHook, op: Op) -> Result<T, SdkError>
where
    Op: FnOnce(Completion<T>),
{
    let (sender, receiver) = oneshot::channel();
    op(Completion::new(sender, Arc::clone(&on_violation)));
    match receiver.await {
        Ok(result) => result,
        Err(_) => {
            on_violation(BridgeViolation::NeverResolved);
            panic!("{}", BridgeViolation::NeverResolved)
        }
    }
}
