//! Employee service implementation.

use crate::dto::{EmployeeListResponse, EmployeeResponse};
use crate::employee_service::EmployeeService;
use async_trait::async_trait;
use roster_core::{EmployeeId, RosterError, RosterResult};
use roster_repository::EmployeeRepository;
use std::sync::Arc;
use tracing::debug;

/// Employee service backed by an employee repository.
pub struct EmployeeServiceImpl<R: EmployeeRepository> {
    employee_repository: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeServiceImpl<R> {
    /// Creates a new employee service.
    pub fn new(employee_repository: Arc<R>) -> Self {
        Self {
            employee_repository,
        }
    }
}

#[async_trait]
impl<R: EmployeeRepository + 'static> EmployeeService for EmployeeServiceImpl<R> {
    async fn list_employees(&self) -> RosterResult<EmployeeListResponse> {
        debug!("Listing employees");

        let employees = self.employee_repository.find_all().await?;
        Ok(EmployeeListResponse::from(employees))
    }

    async fn get_employee(&self, id: EmployeeId) -> RosterResult<EmployeeResponse> {
        debug!("Getting employee: {}", id);

        let employee = self
            .employee_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Employee", id))?;

        Ok(EmployeeResponse::from(employee))
    }
}

impl<R: EmployeeRepository> std::fmt::Debug for EmployeeServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_domain::Employee;
    use roster_repository::InMemoryEmployeeRepository;

    fn service_over(
        employees: Vec<Employee>,
    ) -> EmployeeServiceImpl<InMemoryEmployeeRepository> {
        EmployeeServiceImpl::new(Arc::new(InMemoryEmployeeRepository::new(employees)))
    }

    #[tokio::test]
    async fn test_list_employees_projects_every_record() {
        let service = EmployeeServiceImpl::new(Arc::new(InMemoryEmployeeRepository::seeded()));

        let response = service.list_employees().await.unwrap();

        assert_eq!(response.count, 3);
        assert_eq!(
            response.employees.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_list_applies_the_projection_rules() {
        let service = EmployeeServiceImpl::new(Arc::new(InMemoryEmployeeRepository::seeded()));

        let response = service.list_employees().await.unwrap();
        let david = &response.employees[1];

        assert_eq!(david.title, "N/A");
        assert_eq!(david.work_address.as_deref(), Some("123 ABC Street"));
        assert!(david.registration_date.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_source_order() {
        let service = service_over(vec![
            Employee::new(9, "Grace"),
            Employee::new(4, "Ada"),
            Employee::new(6, "Edsger"),
        ]);

        let response = service.list_employees().await.unwrap();
        assert_eq!(
            response.employees.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![9, 4, 6]
        );
    }

    #[tokio::test]
    async fn test_list_of_empty_source_is_empty() {
        let service = service_over(vec![]);

        let response = service.list_employees().await.unwrap();
        assert_eq!(response.count, 0);
        assert!(response.employees.is_empty());
    }

    #[tokio::test]
    async fn test_get_employee_projects_the_record() {
        let date = NaiveDate::from_ymd_opt(2013, 3, 15).unwrap();
        let service = service_over(vec![Employee::new(2, "David")
            .with_age(35)
            .with_registration_date(date)
            .with_office_address("123 ABC Street")]);

        let response = service.get_employee(2).await.unwrap();

        assert_eq!(response.name, "David");
        assert_eq!(response.title, "N/A");
        assert!(response.registration_date.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_employee_is_not_found() {
        let service = service_over(vec![]);

        let err = service.get_employee(42).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.status_code(), 404);
    }
}
