//! Core domain types
//!
//! This module contains the core domain structures used across Kiln crates.
//! These types represent the fundamental build entities and are shared between
//! the embedder (sequences steps and owns the user-facing output) and the
//! builder (executes steps).

pub mod firewall;
pub mod log;
pub mod step;
