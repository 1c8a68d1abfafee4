//! # Roster Service
//!
//! Business logic service layer for Roster. Holds the view-facing DTOs,
//! the projection from domain records into them, and the mapping service
//! that applies the projection over the data provider's records.

pub mod dto;
pub mod employee_service;
pub mod r#impl;
pub mod mappers;

pub use dto::*;
pub use employee_service::*;
pub use r#impl::*;
