//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{EmployeeId, RosterResult};
use roster_domain::Employee;

/// Employee repository trait.
///
/// Implementations must return records in a stable order; callers rely on
/// the sequence being preserved through projection.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Returns all employees, in the data source's order.
    async fn find_all(&self) -> RosterResult<Vec<Employee>>;

    /// Finds an employee by ID.
    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>>;

    /// Counts all employees.
    async fn count(&self) -> RosterResult<u64>;
}
