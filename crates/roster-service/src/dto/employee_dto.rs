//! Employee-related DTOs and their projection from the domain entity.

use chrono::NaiveDate;
use roster_core::EmployeeId;
use roster_domain::Employee;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Substituted for an absent title on projection.
pub const MISSING_TITLE: &str = "N/A";

/// Employee response DTO.
///
/// The view-facing shape of an employee record. `registration_date` is
/// declared here but never populated from the domain record; the field is
/// deliberately withheld from the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub title: String,
    pub name: String,
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,
    pub work_address: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            title: employee.title.unwrap_or_else(|| MISSING_TITLE.to_string()),
            name: employee.name,
            age: employee.age,
            registration_date: None,
            work_address: employee.office_address,
        }
    }
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self::from(employee.clone())
    }
}

/// Employee list response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeResponse>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_and_name_copied_verbatim() {
        let employee = Employee::new(41, "Ada").with_title("Dr");
        let response = EmployeeResponse::from(&employee);

        assert_eq!(response.id, employee.id);
        assert_eq!(response.name, employee.name);
    }

    #[test]
    fn test_present_title_copied() {
        let response = EmployeeResponse::from(Employee::new(1, "Simon").with_title("Mr"));
        assert_eq!(response.title, "Mr");
    }

    #[test]
    fn test_absent_title_substituted() {
        let response = EmployeeResponse::from(Employee::new(2, "David"));
        assert_eq!(response.title, MISSING_TITLE);
    }

    #[test]
    fn test_age_propagated_including_absent() {
        let with_age = EmployeeResponse::from(Employee::new(1, "Simon").with_age(32));
        assert_eq!(with_age.age, Some(32));

        let without_age = EmployeeResponse::from(Employee::new(2, "David"));
        assert!(without_age.age.is_none());
    }

    #[test]
    fn test_registration_date_always_withheld() {
        let date = NaiveDate::from_ymd_opt(2015, 12, 5).unwrap();
        let response =
            EmployeeResponse::from(Employee::new(1, "Simon").with_registration_date(date));

        assert!(response.registration_date.is_none());
    }

    #[test]
    fn test_work_address_renamed_from_office_address() {
        let with_address =
            EmployeeResponse::from(Employee::new(2, "David").with_office_address("123 ABC Street"));
        assert_eq!(with_address.work_address.as_deref(), Some("123 ABC Street"));

        let without_address = EmployeeResponse::from(Employee::new(3, "Peter"));
        assert!(without_address.work_address.is_none());
    }

    #[test]
    fn test_projection_of_fully_populated_record() {
        let employee = Employee::new(1, "Simon")
            .with_title("Mr")
            .with_age(32)
            .with_registration_date(NaiveDate::from_ymd_opt(2015, 12, 5).unwrap());

        let response = EmployeeResponse::from(employee);

        assert_eq!(response.id, 1);
        assert_eq!(response.title, "Mr");
        assert_eq!(response.name, "Simon");
        assert_eq!(response.age, Some(32));
        assert!(response.registration_date.is_none());
        assert!(response.work_address.is_none());
    }

    #[test]
    fn test_projection_of_record_without_title() {
        let employee = Employee::new(2, "David")
            .with_age(35)
            .with_registration_date(NaiveDate::from_ymd_opt(2013, 3, 15).unwrap())
            .with_office_address("123 ABC Street");

        let response = EmployeeResponse::from(employee);

        assert_eq!(response.id, 2);
        assert_eq!(response.title, "N/A");
        assert_eq!(response.name, "David");
        assert_eq!(response.age, Some(35));
        assert!(response.registration_date.is_none());
        assert_eq!(response.work_address.as_deref(), Some("123 ABC Street"));
    }

    #[test]
    fn test_projection_of_sparse_record() {
        let employee = Employee::new(3, "Peter").with_title("Mr").with_age(29);

        let response = EmployeeResponse::from(employee);

        assert_eq!(response.id, 3);
        assert_eq!(response.title, "Mr");
        assert_eq!(response.name, "Peter");
        assert_eq!(response.age, Some(29));
        assert!(response.registration_date.is_none());
        assert!(response.work_address.is_none());
    }

    #[test]
    fn test_withheld_registration_date_never_serialized() {
        let response = EmployeeResponse::from(
            Employee::new(1, "Simon")
                .with_registration_date(NaiveDate::from_ymd_opt(2015, 12, 5).unwrap()),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("registration_date").is_none());
        assert!(json["work_address"].is_null());
    }
}
