use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    store,
    utils::csv::{export_filename, render_report},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// Day to export, `YYYY-MM-DD`.
    #[param(example = "2026-08-26", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// Export a day's attendance as CSV
#[utoipa::path(
    get,
    path = "/api/v1/attendance/export",
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV report, one row per record", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Database error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn export_attendance(
    pool: web::Data<MySqlPool>,
    query: web::Query<ExportQuery>,
) -> impl Responder {
    let records = match store::list_attendance_for(pool.get_ref(), query.date).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, date = %query.date, "Failed to fetch records for export");
            return HttpResponse::InternalServerError().json(json!({
                "message": "Database error"
            }));
        }
    };

    let body = render_report(&records);
    let filename = export_filename(query.date);

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(body)
}
