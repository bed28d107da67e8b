//! Shared build context
//!
//! Contains all state threaded through the steps of one build run:
//! - Builder configuration
//! - Driver handle for cloud provider calls
//! - Ui handle for user-facing output
//! - State individual steps record for later steps and for compensation
//!
//! The context is owned by the embedder and borrowed mutably by one step at
//! a time under its sequencing contract, so no internal locking is needed.
//! Each step owns only its own keys; unrelated fields belong to other steps.

use std::sync::Arc;

use kiln_core::domain::log::Ui;

use crate::config::Config;
use crate::driver::Driver;
use crate::error::StepError;

/// Typed shared state for one build run
///
/// Lives for the whole run: values a step records during `execute` are
/// still present when its `compensate` runs during teardown.
pub struct BuildContext {
    /// Builder configuration
    pub config: Config,

    /// Cloud driver issuing the actual create/delete calls
    pub driver: Arc<dyn Driver>,

    /// User-facing messaging sink
    pub ui: Arc<dyn Ui>,

    /// Name of the temporary firewall rule, recorded by the firewall step
    /// after the create is confirmed. Empty means no rule to clean up.
    pub firewall_rule_name: String,

    /// Error that halted the run, recorded by the failing step
    pub last_error: Option<StepError>,
}

impl BuildContext {
    /// Creates a new build context
    ///
    /// # Arguments
    /// * `config` - Builder configuration
    /// * `driver` - Cloud driver handle
    /// * `ui` - User-facing messaging sink
    pub fn new(config: Config, driver: Arc<dyn Driver>, ui: Arc<dyn Ui>) -> Self {
        Self {
            config,
            driver,
            ui,
            firewall_rule_name: String::new(),
            last_error: None,
        }
    }

    /// Records the error that halted the run
    pub fn set_error(&mut self, error: StepError) {
        self.last_error = Some(error);
    }
}
