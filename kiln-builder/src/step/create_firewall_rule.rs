//! Temporary firewall rule step
//!
//! Opens a firewall rule allowing SSH to the build instance for the
//! duration of the build, and removes it again during teardown. The rule
//! name is derived deterministically from the instance name, so the name
//! recorded after a confirmed create is all compensation needs.
//!
//! Both phases wait on the driver's completion signal bounded by the
//! configured state timeout. A timed-out wait does not cancel the remote
//! operation; a create that times out locally may still succeed on the
//! provider side and leave a rule behind for manual cleanup (or for a
//! later run, which derives the same name).

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use kiln_core::domain::firewall::FirewallRule;
use kiln_core::domain::step::StepAction;

use crate::context::BuildContext;
use crate::driver::{PendingOperation, WaitOutcome};
use crate::error::{StepError, WaitFailure};
use crate::step::Step;

/// Step that provisions the temporary SSH firewall rule
pub struct CreateFirewallRuleStep;

impl CreateFirewallRuleStep {
    /// Creates the step
    pub fn new() -> Self {
        Self
    }
}

impl Default for CreateFirewallRuleStep {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for a pending operation, mapping the outcome to a wait failure
///
/// `label` names what was being waited for, for the timeout message.
async fn wait_for(
    operation: PendingOperation,
    deadline: Duration,
    label: &str,
) -> Result<(), WaitFailure> {
    match operation.wait_with_deadline(deadline).await {
        WaitOutcome::Completed => Ok(()),
        WaitOutcome::Failed(e) => Err(WaitFailure::Driver(e)),
        WaitOutcome::TimedOut => Err(WaitFailure::TimedOut(label.to_string())),
    }
}

#[async_trait]
impl Step for CreateFirewallRuleStep {
    async fn execute(&self, ctx: &mut BuildContext) -> StepAction {
        ctx.ui.say("Creating a temporary firewall rule...");

        let rule = FirewallRule::temporary_ssh(
            &ctx.config.instance_name,
            &ctx.config.network,
            &ctx.config.tags,
        );
        let name = rule.name.clone();

        debug!("Submitting firewall rule create: {}", name);

        let wait = match ctx.driver.create_firewall_rule(&rule).await {
            Ok(operation) => {
                ctx.ui
                    .message("Waiting for the creation operation to complete...");
                wait_for(
                    operation,
                    ctx.config.state_timeout,
                    "firewall rule to create",
                )
                .await
            }
            Err(e) => Err(WaitFailure::Driver(e)),
        };

        if let Err(cause) = wait {
            let err = StepError::CreateFirewallRule(cause);
            error!("{}", err);
            ctx.ui.error(&err.to_string());
            ctx.set_error(err);
            return StepAction::Halt;
        }

        info!("Firewall rule {} created", name);
        ctx.ui.message("Firewall rule has been created!");

        if ctx.config.debug {
            ctx.ui.message(&format!("Firewall rule: {} created", name));
        }

        // The create is confirmed; record the name so compensation can
        // remove the rule later.
        ctx.firewall_rule_name = name;

        StepAction::Continue
    }

    async fn compensate(&self, ctx: &mut BuildContext) {
        // Nothing recorded means nothing was created: no driver call, no
        // messages, so a second invocation after cleanup is also a no-op.
        if ctx.firewall_rule_name.is_empty() {
            return;
        }
        let name = ctx.firewall_rule_name.clone();

        ctx.ui.say("Deleting the temporary firewall rule...");

        let wait = match ctx.driver.delete_firewall_rule(&name).await {
            Ok(operation) => {
                wait_for(
                    operation,
                    ctx.config.state_timeout,
                    "firewall rule to delete",
                )
                .await
            }
            Err(e) => Err(WaitFailure::Driver(e)),
        };

        if let Err(cause) = wait {
            warn!("Failed to delete firewall rule {}: {}", name, cause);
            ctx.ui.error(&format!(
                "Error deleting firewall rule. Please delete it manually.\n\n\
                 Name: {}\n\
                 Error: {}",
                name, cause
            ));
        }

        ctx.firewall_rule_name.clear();
        ctx.ui.message("Firewall rule has been deleted!");
    }
}
