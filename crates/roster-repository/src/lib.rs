//! # Roster Repository
//!
//! Data access layer for Roster:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn EmployeeRepository>   (domain interface)
//! InMemoryEmployeeRepository         (fixed in-memory data set)
//! ```
//!
//! The in-memory implementation stands in for a real data source; the
//! service layer treats it as an opaque ordered source and assumes
//! nothing about its size or content.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
