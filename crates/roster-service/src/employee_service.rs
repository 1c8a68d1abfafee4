//! Employee service trait definition.

use crate::dto::{EmployeeListResponse, EmployeeResponse};
use async_trait::async_trait;
use roster_core::{EmployeeId, RosterResult};

/// Employee service trait.
///
/// Applies the employee projection over records supplied by the data
/// provider. Output order follows the provider's order; the length of a
/// listing always equals the number of source records.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Lists all employees, projected into their view shape.
    async fn list_employees(&self) -> RosterResult<EmployeeListResponse>;

    /// Gets a single employee by ID, projected into its view shape.
    async fn get_employee(&self, id: EmployeeId) -> RosterResult<EmployeeResponse>;
}
