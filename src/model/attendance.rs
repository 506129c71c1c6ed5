use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// One attendance row joined with its owning employee, as listed for a day.
/// The employee's code column is aliased to `employee_code` in the join so it
/// does not collide with the record's `employee_id` foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": 1,
        "date": "2026-08-26",
        "check_in": "2026-08-26T08:02:11",
        "check_out": null,
        "created_at": "2026-08-26T08:02:11",
        "name": "Ahmed",
        "email": "ahmed@company.com",
        "employee_code": "EMP-001"
    })
)]
pub struct AttendanceWithEmployee {
    #[schema(example = 7)]
    pub id: u64,
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "2026-08-26", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "2026-08-26T08:02:11", value_type = String, format = "date-time", nullable = true)]
    pub check_in: Option<NaiveDateTime>,
    #[schema(example = "2026-08-26T17:00:00", value_type = String, format = "date-time", nullable = true)]
    pub check_out: Option<NaiveDateTime>,
    #[schema(example = "2026-08-26T08:02:11", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
    #[schema(example = "Ahmed")]
    pub name: String,
    #[schema(example = "ahmed@company.com")]
    pub email: String,
    #[schema(example = "EMP-001")]
    pub employee_code: String,
}

/// Which action applies next for an employee on the selected day.
/// The three are mutually exclusive: check-in, then check-out, then nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceStatus {
    NotCheckedIn,
    CheckedIn,
    Complete,
}

impl AttendanceWithEmployee {
    pub fn status(&self) -> AttendanceStatus {
        match (self.check_in, self.check_out) {
            (None, _) => AttendanceStatus::NotCheckedIn,
            (Some(_), None) => AttendanceStatus::CheckedIn,
            (Some(_), Some(_)) => AttendanceStatus::Complete,
        }
    }
}

#[cfg(test)]
mod attendance_status_tests {
    use super::*;
    use rstest::rstest;

    fn record(check_in: Option<&str>, check_out: Option<&str>) -> AttendanceWithEmployee {
        let ts = |s: &str| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid test timestamp")
        };
        AttendanceWithEmployee {
            id: 7,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            check_in: check_in.map(ts),
            check_out: check_out.map(ts),
            created_at: ts("2026-08-26T08:02:11"),
            name: "Ahmed".into(),
            email: "ahmed@company.com".into(),
            employee_code: "EMP-001".into(),
        }
    }

    #[rstest]
    #[case(None, None, AttendanceStatus::NotCheckedIn)]
    #[case(Some("2026-08-26T08:02:11"), None, AttendanceStatus::CheckedIn)]
    #[case(
        Some("2026-08-26T08:02:11"),
        Some("2026-08-26T17:00:00"),
        AttendanceStatus::Complete
    )]
    fn status_follows_timestamps(
        #[case] check_in: Option<&str>,
        #[case] check_out: Option<&str>,
        #[case] expected: AttendanceStatus,
    ) {
        assert_eq!(record(check_in, check_out).status(), expected);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(AttendanceStatus::NotCheckedIn.to_string(), "not_checked_in");
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::CheckedIn).unwrap(),
            "\"checked_in\""
        );
    }
}
