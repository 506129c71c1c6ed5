use crate::api::attendance::{AttendanceEntry, AttendanceListResponse, CheckInRequest};
use crate::api::employee::{CreateEmployee, EmployeeListResponse};
use crate::model::attendance::{AttendanceStatus, AttendanceWithEmployee};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Attendance Tracker

This API backs a single-screen attendance tracker for a small organization.

### 🔹 Key Features
- **Employee Management**
  - List employees and register new ones
- **Attendance Management**
  - Per-day check-in and check-out recording
- **Reporting**
  - CSV export of a day's records

### 📦 Response Format
- JSON-based RESTful responses
- CSV attachment for the export endpoint

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::check_in,
        crate::api::attendance::check_out,

        crate::api::export::export_attendance,
    ),
    components(
        schemas(
            Employee,
            EmployeeListResponse,
            CreateEmployee,
            AttendanceWithEmployee,
            AttendanceStatus,
            AttendanceEntry,
            AttendanceListResponse,
            CheckInRequest
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance recording and export APIs"),
    )
)]
pub struct ApiDoc;
