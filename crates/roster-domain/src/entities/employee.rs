//! Employee entity.

use chrono::NaiveDate;
use roster_core::EmployeeId;
use serde::{Deserialize, Serialize};

/// Employee entity as stored by the upstream data source.
///
/// Only `id` and `name` are guaranteed to be present; every other field
/// may be absent on any given record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,

    /// Honorific title, when known.
    pub title: Option<String>,

    /// Employee's name.
    pub name: String,

    /// Employee's age, when known.
    pub age: Option<u32>,

    /// Date the employee was registered with the roster.
    pub registration_date: Option<NaiveDate>,

    /// Street address of the employee's office.
    pub office_address: Option<String>,
}

impl Employee {
    /// Creates a new employee with the required fields; all optional
    /// fields start out absent.
    #[must_use]
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            title: None,
            name: name.into(),
            age: None,
            registration_date: None,
            office_address: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the age.
    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the registration date.
    #[must_use]
    pub fn with_registration_date(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    /// Sets the office address.
    #[must_use]
    pub fn with_office_address(mut self, address: impl Into<String>) -> Self {
        self.office_address = Some(address.into());
        self
    }
}
