//! Error types for provisioning steps

use thiserror::Error;

use crate::driver::DriverError;

/// Result type alias for step operations
pub type Result<T> = std::result::Result<T, StepError>;

/// Errors a step can record into the build context
///
/// Each variant names the action that failed and wraps the underlying
/// cause, so the message shown to the user reads as
/// "Error creating firewall rule: <cause>".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepError {
    /// The temporary firewall rule could not be created
    #[error("Error creating firewall rule: {0}")]
    CreateFirewallRule(WaitFailure),

    /// The temporary firewall rule could not be deleted
    #[error("Error deleting firewall rule: {0}")]
    DeleteFirewallRule(WaitFailure),
}

impl StepError {
    /// Check if the underlying cause was a timed-out wait
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::CreateFirewallRule(WaitFailure::TimedOut(_))
                | Self::DeleteFirewallRule(WaitFailure::TimedOut(_))
        )
    }

    /// Check if the driver rejected the request before it started
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::CreateFirewallRule(WaitFailure::Driver(DriverError::Rejected(_)))
                | Self::DeleteFirewallRule(WaitFailure::Driver(DriverError::Rejected(_)))
        )
    }
}

/// Why a bounded wait on a remote operation did not confirm it
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WaitFailure {
    /// The driver rejected the request or the provider reported failure
    #[error(transparent)]
    Driver(DriverError),

    /// The deadline elapsed before the completion signal resolved; the
    /// remote operation was not cancelled and may still finish
    #[error("time out while waiting for {0}")]
    TimedOut(String),
}
