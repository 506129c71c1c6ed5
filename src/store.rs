use chrono::{NaiveDate, Utc};
use sqlx::MySqlPool;

use crate::model::attendance::AttendanceWithEmployee;
use crate::model::employee::Employee;

/// Every operation here is one round trip against the store, no retry and no
/// transaction. Errors are returned to the caller untouched; the handlers
/// decide how to surface them.

pub async fn ensure_schema(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name        VARCHAR(255) NOT NULL,
            email       VARCHAR(255) NOT NULL,
            employee_id VARCHAR(64)  NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_records (
            id          BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            employee_id BIGINT UNSIGNED NOT NULL,
            check_in    DATETIME NULL,
            check_out   DATETIME NULL,
            date        DATE NOT NULL,
            created_at  DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            KEY idx_attendance_date (date),
            CONSTRAINT fk_attendance_employee
                FOREIGN KEY (employee_id) REFERENCES employees (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// All employees, ordered by display name. Empty vec when the table is empty.
pub async fn list_employees(pool: &MySqlPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, name, email, employee_id
        FROM employees
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

/// The given day's records, each joined with its owning employee, most
/// recently created first.
pub async fn list_attendance_for(
    pool: &MySqlPool,
    date: NaiveDate,
) -> Result<Vec<AttendanceWithEmployee>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceWithEmployee>(
        r#"
        SELECT
            r.id,
            r.employee_id,
            r.date,
            r.check_in,
            r.check_out,
            r.created_at,
            e.name,
            e.email,
            e.employee_id AS employee_code
        FROM attendance_records r
        JOIN employees e ON e.id = r.employee_id
        WHERE r.date = ?
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Insert a check-in record stamped with the current UTC time. There is
/// deliberately no same-day duplicate guard; the store accepts whatever the
/// operator records.
pub async fn check_in(
    pool: &MySqlPool,
    employee_id: u64,
    date: NaiveDate,
) -> Result<(), sqlx::Error> {
    let now = Utc::now().naive_utc();

    sqlx::query(
        r#"
        INSERT INTO attendance_records (employee_id, check_in, date, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(now)
    .bind(date)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Stamp the record's check-out with the current UTC time. Returns the number
/// of rows touched so the handler can answer 404 for an unknown id. The
/// driver negotiates CLIENT_FOUND_ROWS, so this counts matched rows and a
/// repeat check-out writing an identical timestamp still reports 1.
pub async fn check_out(pool: &MySqlPool, record_id: u64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE attendance_records
        SET check_out = ?
        WHERE id = ?
        "#,
    )
    .bind(Utc::now().naive_utc())
    .bind(record_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Plain insert; duplicate employee codes are not rejected here.
pub async fn create_employee(
    pool: &MySqlPool,
    name: &str,
    email: &str,
    employee_code: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO employees (name, email, employee_id)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(employee_code)
    .execute(pool)
    .await?;

    Ok(())
}
