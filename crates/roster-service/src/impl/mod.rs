//! Employee service implementations.

mod employee_service_impl;

pub use employee_service_impl::*;
