//! Test doubles for the driver seam
//!
//! `ScriptedDriver` implements `Driver` with a fixed behavior per call kind
//! and records every submission, so step tests can script each failure mode
//! (immediate rejection, provider error, never-resolving signal) and assert
//! on what was submitted.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use kiln_core::domain::firewall::FirewallRule;

use crate::driver::{Driver, DriverError, PendingOperation};

/// How the scripted driver handles a call
pub enum DriverBehavior {
    /// Reject the submission synchronously
    Reject(String),
    /// Accept and resolve the completion signal with success
    ResolveOk,
    /// Accept and resolve the completion signal with a provider error
    ResolveErr(String),
    /// Accept and never resolve the completion signal
    NeverResolve,
}

/// Driver double with scripted outcomes and recorded submissions
pub struct ScriptedDriver {
    create: DriverBehavior,
    delete: DriverBehavior,
    created: Mutex<Vec<FirewallRule>>,
    deleted: Mutex<Vec<String>>,
    // Senders kept alive so NeverResolve waits hit the deadline instead of
    // observing a dropped signal
    parked: Mutex<Vec<oneshot::Sender<Result<(), DriverError>>>>,
}

impl ScriptedDriver {
    pub fn new(create: DriverBehavior, delete: DriverBehavior) -> Self {
        Self {
            create,
            delete,
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            parked: Mutex::new(Vec::new()),
        }
    }

    /// Rules submitted for creation, in call order
    pub fn created_rules(&self) -> Vec<FirewallRule> {
        self.created.lock().unwrap().clone()
    }

    /// Names submitted for deletion, in call order
    pub fn deleted_names(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> usize {
        self.deleted.lock().unwrap().len()
    }

    fn run(&self, behavior: &DriverBehavior) -> Result<PendingOperation, DriverError> {
        match behavior {
            DriverBehavior::Reject(message) => Err(DriverError::Rejected(message.clone())),
            DriverBehavior::ResolveOk => {
                let (tx, operation) = PendingOperation::channel();
                let _ = tx.send(Ok(()));
                Ok(operation)
            }
            DriverBehavior::ResolveErr(message) => {
                let (tx, operation) = PendingOperation::channel();
                let _ = tx.send(Err(DriverError::Operation(message.clone())));
                Ok(operation)
            }
            DriverBehavior::NeverResolve => {
                let (tx, operation) = PendingOperation::channel();
                self.parked.lock().unwrap().push(tx);
                Ok(operation)
            }
        }
    }
}

#[async_trait]
impl Driver for ScriptedDriver {
    async fn create_firewall_rule(
        &self,
        rule: &FirewallRule,
    ) -> Result<PendingOperation, DriverError> {
        self.created.lock().unwrap().push(rule.clone());
        self.run(&self.create)
    }

    async fn delete_firewall_rule(&self, name: &str) -> Result<PendingOperation, DriverError> {
        self.deleted.lock().unwrap().push(name.to_string());
        self.run(&self.delete)
    }
}
