//! # Roster Core
//!
//! Core types and error definitions for Roster.
//! This crate provides the foundational abstractions used across all layers
//! of the application.

pub mod error;
pub mod id;
pub mod result;

pub use error::*;
pub use id::*;
pub use result::*;
