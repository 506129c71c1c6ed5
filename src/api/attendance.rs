use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::attendance::{AttendanceStatus, AttendanceWithEmployee},
    store,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    /// Day to list, `YYYY-MM-DD`.
    #[param(example = "2026-08-26", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceEntry {
    #[serde(flatten)]
    pub record: AttendanceWithEmployee,
    /// Derived from the timestamps: check-in, check-out, or complete.
    #[schema(example = "checked_in")]
    pub status: AttendanceStatus,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceEntry>,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CheckInRequest {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2026-08-26", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// List a day's attendance
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Records for the day, newest first", body = AttendanceListResponse),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Database error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<MySqlPool>,
    query: web::Query<AttendanceQuery>,
) -> impl Responder {
    let records = match store::list_attendance_for(pool.get_ref(), query.date).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, date = %query.date, "Failed to fetch attendance records");
            return HttpResponse::InternalServerError().json(json!({
                "message": "Database error"
            }));
        }
    };

    let data: Vec<AttendanceEntry> = records
        .into_iter()
        .map(|record| {
            let status = record.status();
            AttendanceEntry { record, status }
        })
        .collect();

    let total = data.len();
    HttpResponse::Ok().json(AttendanceListResponse { data, total })
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/v1/attendance/check-in",
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Checked in successfully", body = Object, example = json!({
            "message": "Checked in successfully"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CheckInRequest>,
) -> impl Responder {
    // A second same-day check-in for the employee creates a second record;
    // the store carries no uniqueness constraint for (employee, date).
    let result = store::check_in(pool.get_ref(), payload.employee_id, payload.date).await;

    match result {
        Ok(()) => HttpResponse::Ok().json(json!({
            "message": "Checked in successfully"
        })),
        Err(e) => {
            error!(error = %e, employee_id = payload.employee_id, "Check-in failed");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/v1/attendance/{id}/check-out",
    params(
        ("id", Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Checked out successfully", body = Object, example = json!({
            "message": "Checked out successfully"
        })),
        (status = 404, description = "Attendance record not found", body = Object, example = json!({
            "message": "Attendance record not found"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_out(pool: web::Data<MySqlPool>, path: web::Path<u64>) -> impl Responder {
    let record_id = path.into_inner();

    match store::check_out(pool.get_ref(), record_id).await {
        Ok(0) => HttpResponse::NotFound().json(json!({
            "message": "Attendance record not found"
        })),
        Ok(_) => HttpResponse::Ok().json(json!({
            "message": "Checked out successfully"
        })),
        Err(e) => {
            error!(error = %e, record_id, "Check-out failed");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            }))
        }
    }
}
