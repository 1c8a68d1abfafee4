//! OpenAPI documentation configuration.

use roster_core::ErrorResponse;
use roster_service::{EmployeeListResponse, EmployeeResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "Employee roster with view-model projection",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Employee endpoints
        crate::controllers::employee_controller::list_employees,
        crate::controllers::employee_controller::get_employee,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            EmployeeResponse,
            EmployeeListResponse,
        )
    ),
    tags(
        (name = "employees", description = "Employee roster endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
