//! Entity-DTO mappers.

// The element-wise projection lives as From/Into impls on the DTOs
// themselves; this module holds the collection-level mapping.

use crate::dto::{EmployeeListResponse, EmployeeResponse};
use roster_domain::Employee;

/// Converts an ordered collection of employees to a list response,
/// projecting each record in place. Order and length are preserved.
impl From<Vec<Employee>> for EmployeeListResponse {
    fn from(employees: Vec<Employee>) -> Self {
        let employees: Vec<EmployeeResponse> =
            employees.into_iter().map(EmployeeResponse::from).collect();
        Self {
            count: employees.len(),
            employees,
        }
    }
}
