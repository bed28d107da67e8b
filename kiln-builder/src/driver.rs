//! Cloud driver contract
//!
//! The driver issues the actual network calls against the cloud provider.
//! Create and delete are asynchronous on the provider side: the driver
//! returns a `PendingOperation` immediately, and the operation's outcome
//! arrives later through a one-shot completion signal resolved by whatever
//! background execution context the driver runs.
//!
//! Steps consume the signal through `wait_with_deadline`, which races it
//! against a deadline timer. The deadline is an observation deadline only:
//! it never instructs the driver to abort the remote operation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::oneshot;

use kiln_core::domain::firewall::FirewallRule;

/// Errors reported by a cloud driver
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    /// The driver rejected the request synchronously, before any remote
    /// operation started (e.g. a malformed specification)
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The provider reported failure through the completion signal
    #[error("{0}")]
    Operation(String),
}

/// Cloud driver for firewall rule lifecycle calls
///
/// Implemented externally (real provider client, or a scripted double in
/// tests); the builder only consumes it.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Submits a firewall rule create request
    ///
    /// Returns an error if the provider rejects the submission outright;
    /// otherwise returns the pending operation whose completion signal
    /// resolves exactly once with the remote outcome.
    async fn create_firewall_rule(
        &self,
        rule: &FirewallRule,
    ) -> Result<PendingOperation, DriverError>;

    /// Submits a delete request for a firewall rule by name
    async fn delete_firewall_rule(&self, name: &str) -> Result<PendingOperation, DriverError>;
}

/// A remote operation in flight
///
/// Wraps the one-shot completion signal for an operation the driver has
/// accepted. Consumed exactly once by `wait_with_deadline`; never persisted.
pub struct PendingOperation {
    receiver: oneshot::Receiver<Result<(), DriverError>>,
}

impl PendingOperation {
    /// Wraps a completion signal receiver
    pub fn new(receiver: oneshot::Receiver<Result<(), DriverError>>) -> Self {
        Self { receiver }
    }

    /// Creates a resolver/operation pair
    ///
    /// The driver keeps the sender and resolves it from its background
    /// execution context once the provider reports the outcome.
    pub fn channel() -> (oneshot::Sender<Result<(), DriverError>>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self::new(rx))
    }

    /// Waits for the operation to complete, bounded by a deadline.
    ///
    /// Suspends until either the completion signal resolves or the deadline
    /// elapses, whichever comes first. There is no polling and no retry;
    /// the wait happens exactly once.
    ///
    /// A dropped sender is reported as an operation failure: the driver
    /// abandoned the operation without resolving it.
    pub async fn wait_with_deadline(self, deadline: Duration) -> WaitOutcome {
        match tokio::time::timeout(deadline, self.receiver).await {
            Ok(Ok(Ok(()))) => WaitOutcome::Completed,
            Ok(Ok(Err(e))) => WaitOutcome::Failed(e),
            Ok(Err(_)) => WaitOutcome::Failed(DriverError::Operation(
                "completion signal dropped before the operation resolved".to_string(),
            )),
            Err(_) => WaitOutcome::TimedOut,
        }
    }
}

/// Outcome of waiting on a pending operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The provider confirmed the operation
    Completed,

    /// The provider reported failure
    Failed(DriverError),

    /// The deadline elapsed before the completion signal resolved.
    ///
    /// This is an observation deadline, not a cancellation: the remote
    /// operation was not aborted and may still complete afterwards. A
    /// timed-out create can therefore leave an orphaned rule behind, to be
    /// removed manually or by a later run deriving the same deterministic
    /// rule name.
    TimedOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_completed() {
        let (tx, op) = PendingOperation::channel();
        tx.send(Ok(())).unwrap();

        let outcome = op.wait_with_deadline(Duration::from_secs(1)).await;
        assert_eq!(outcome, WaitOutcome::Completed);
    }

    #[tokio::test]
    async fn test_wait_failed() {
        let (tx, op) = PendingOperation::channel();
        tx.send(Err(DriverError::Operation("quota exceeded".to_string())))
            .unwrap();

        let outcome = op.wait_with_deadline(Duration::from_secs(1)).await;
        assert_eq!(
            outcome,
            WaitOutcome::Failed(DriverError::Operation("quota exceeded".to_string()))
        );
    }

    #[tokio::test]
    async fn test_wait_times_out_when_signal_never_resolves() {
        let (tx, op) = PendingOperation::channel();

        let outcome = op.wait_with_deadline(Duration::from_millis(20)).await;
        assert_eq!(outcome, WaitOutcome::TimedOut);

        // The signal is still live; the remote operation could still finish.
        drop(tx);
    }

    #[tokio::test]
    async fn test_dropped_sender_is_a_failure_not_a_timeout() {
        let (tx, op) = PendingOperation::channel();
        drop(tx);

        let outcome = op.wait_with_deadline(Duration::from_secs(1)).await;
        assert!(matches!(outcome, WaitOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_signal_resolved_from_background_task() {
        let (tx, op) = PendingOperation::channel();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = tx.send(Ok(()));
        });

        let outcome = op.wait_with_deadline(Duration::from_secs(1)).await;
        assert_eq!(outcome, WaitOutcome::Completed);
    }
}
