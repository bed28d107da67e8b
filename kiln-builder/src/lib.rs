//! Kiln Builder
//!
//! Provisioning steps for machine-image builds, plus the seams they consume.
//!
//! Architecture:
//! - Configuration: builder settings from environment or defaults
//! - Context: typed shared state threaded through every step of a run
//! - Driver: trait for the cloud provider's asynchronous create/delete calls
//! - Steps: two-phase units of work (`execute` forward, `compensate` reverse)
//!
//! The embedder sequences steps, calls `execute` on each until one returns
//! `StepAction::Halt`, then calls `compensate` on every step that was
//! entered, in reverse order, regardless of earlier outcomes. Compensation
//! is best-effort by contract: it never returns an error and never panics,
//! because failing to clean up one resource must not abort the teardown of
//! the others.

pub mod config;
pub mod context;
pub mod driver;
pub mod error;
pub mod step;
pub mod ui;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use context::BuildContext;
pub use driver::{Driver, DriverError, PendingOperation, WaitOutcome};
pub use error::{Result, StepError, WaitFailure};
pub use step::{CreateFirewallRuleStep, Step};
pub use ui::{BufferedUi, TracingUi};
