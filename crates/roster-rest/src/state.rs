//! Application state for Axum handlers.

use roster_service::EmployeeService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(employee_service: Arc<dyn EmployeeService>) -> Self {
        Self { employee_service }
    }
}
