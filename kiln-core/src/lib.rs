//! Kiln Core
//!
//! Core types and abstractions for the Kiln image-build system.
//!
//! This crate contains:
//! - Domain types: Core build entities (FirewallRule, StepAction, etc.)
//! - Messaging contract: the `Ui` trait that steps report progress through

pub mod domain;
