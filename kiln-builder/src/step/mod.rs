//! Provisioning steps
//!
//! Steps are the units of work a build run is made of. Each step has a
//! forward action (`execute`) and a reverse action (`compensate`); the
//! embedder runs forward actions in order until one halts, then runs
//! every entered step's reverse action during teardown.
//!
//! All steps are trait-based to enable testing and dependency injection.

mod create_firewall_rule;

pub use create_firewall_rule::CreateFirewallRuleStep;

use async_trait::async_trait;

use kiln_core::domain::step::StepAction;

use crate::context::BuildContext;

/// A two-phase provisioning step
///
/// The embedder guarantees `compensate` is invoked for every step whose
/// `execute` was entered, independent of earlier halts and of other steps'
/// outcomes.
#[async_trait]
pub trait Step: Send + Sync {
    /// Runs the forward action
    ///
    /// On failure the step records the cause in `ctx.last_error` and
    /// returns `StepAction::Halt`; it does not panic.
    async fn execute(&self, ctx: &mut BuildContext) -> StepAction;

    /// Reverses the forward action during teardown, best-effort
    ///
    /// Hard contract: this never returns an error and never panics.
    /// Failures are reported to the user through the context's `Ui` and
    /// otherwise swallowed, because failing to clean up one resource must
    /// not abort the teardown of the others.
    async fn compensate(&self, ctx: &mut BuildContext);
}
