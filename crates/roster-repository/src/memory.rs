//! In-memory employee data source.

use crate::traits::EmployeeRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use roster_core::{EmployeeId, RosterResult};
use roster_domain::Employee;
use tracing::debug;

/// In-memory employee repository backed by a fixed, ordered record set.
///
/// Records are immutable after construction and are cloned out on every
/// read, so the repository can be shared freely across requests.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    /// Creates a repository over the given records, preserving their order.
    #[must_use]
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Creates a repository seeded with the demonstration data set.
    ///
    /// The three records illustrate a fully-populated record, a record
    /// missing its title, and a record missing both registration date and
    /// office address.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Employee::new(1, "Simon")
                .with_title("Mr")
                .with_age(32)
                .with_registration_date(demo_date(2015, 12, 5)),
            Employee::new(2, "David")
                .with_age(35)
                .with_registration_date(demo_date(2013, 3, 15))
                .with_office_address("123 ABC Street"),
            Employee::new(3, "Peter").with_title("Mr").with_age(29),
        ])
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> RosterResult<Vec<Employee>> {
        debug!("Fetching all {} employees", self.employees.len());
        Ok(self.employees.clone())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RosterResult<Option<Employee>> {
        debug!("Fetching employee: {}", id);
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn count(&self) -> RosterResult<u64> {
        Ok(self.employees.len() as u64)
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
