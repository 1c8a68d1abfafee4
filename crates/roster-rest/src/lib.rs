//! # Roster REST
//!
//! REST API layer using Axum for Roster.
//! Provides HTTP endpoints for the employee roster, health checks, and
//! the static site pages.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
