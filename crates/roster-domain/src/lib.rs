//! # Roster Domain
//!
//! Domain entities for Roster. These are the source-of-truth data shapes
//! as supplied by the upstream data source, before any projection into
//! view-facing records.

pub mod entities;

pub use entities::*;
