//! # Roster Config
//!
//! Layered configuration for Roster: defaults, per-environment overrides,
//! local overrides, and `ROSTER_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
