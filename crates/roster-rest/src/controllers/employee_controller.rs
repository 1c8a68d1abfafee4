//! Employee roster controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use roster_core::EmployeeId;
use roster_service::{EmployeeListResponse, EmployeeResponse};
use tracing::debug;

/// Creates the employee router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/:id", get(get_employee))
}

/// List all employees.
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees, projected for the view", body = EmployeeListResponse)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<EmployeeListResponse> {
    debug!("List employees request");

    let response = state.employee_service.list_employees().await?;
    ok(response)
}

/// Get an employee by ID.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(
        ("id" = EmployeeId, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "The employee, projected for the view", body = EmployeeResponse),
        (status = 404, description = "No employee with this id")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<EmployeeResponse> {
    debug!("Get employee request: {}", id);

    let response = state.employee_service.get_employee(id).await?;
    ok(response)
}
