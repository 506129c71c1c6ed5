use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;
use utoipa::ToSchema;

use crate::{model::employee::Employee, store};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Ahmed")]
    pub name: String,
    #[schema(example = "ahmed@company.com", format = "email")]
    pub email: String,
    /// Human-readable employee code.
    #[schema(example = "EMP-001")]
    pub employee_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(example = json!([{
        "id": 1,
        "name": "Ahmed",
        "email": "ahmed@company.com",
        "employee_id": "EMP-001"
    }]))]
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub total: usize,
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "Employees ordered by name", body = EmployeeListResponse),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Database error"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<MySqlPool>) -> impl Responder {
    match store::list_employees(pool.get_ref()).await {
        Ok(employees) => {
            let total = employees.len();
            HttpResponse::Ok().json(EmployeeListResponse {
                data: employees,
                total,
            })
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch employees");
            HttpResponse::InternalServerError().json(json!({
                "message": "Database error"
            }))
        }
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created successfully", body = Object, example = json!({
            "message": "Employee added successfully"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEmployee>,
) -> impl Responder {
    // No duplicate-code validation; the store accepts repeats.
    let result = store::create_employee(
        pool.get_ref(),
        &payload.name,
        &payload.email,
        &payload.employee_id,
    )
    .await;

    match result {
        Ok(()) => HttpResponse::Ok().json(json!({
            "message": "Employee added successfully"
        })),
        Err(e) => {
            error!(error = %e, "Failed to add employee");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}
