//! Domain entities.

mod employee;

pub use employee::*;
