use chrono::{NaiveDate, NaiveDateTime};

use crate::model::attendance::AttendanceWithEmployee;

/// Column headers, fixed order: name, code, check-in, check-out, date.
/// The report is operator-facing and uses Arabic labels.
const HEADERS: [&str; 5] = [
    "اسم الموظف",
    "رقم الموظف",
    "وقت الحضور",
    "وقت الانصراف",
    "التاريخ",
];

/// Placeholder for a timestamp that was never recorded.
const NOT_RECORDED: &str = "لم يسجل";

/// UTF-8 byte-order mark, kept so spreadsheet tools detect the encoding.
pub const BOM: &str = "\u{feff}";

pub fn export_filename(date: NaiveDate) -> String {
    format!("attendance_{}.csv", date.format("%Y-%m-%d"))
}

/// Render the loaded records of one day as CSV text, BOM first, header row
/// always first, one row per record.
pub fn render_report(records: &[AttendanceWithEmployee]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.map(|h| field(h)).join(","));

    for record in records {
        let row = [
            field(&record.name),
            field(&record.employee_code),
            field(&format_time(record.check_in)),
            field(&format_time(record.check_out)),
            field(&record.date.format("%Y-%m-%d").to_string()),
        ];
        lines.push(row.join(","));
    }

    format!("{}{}", BOM, lines.join("\n"))
}

fn format_time(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(ts) => ts.format("%H:%M").to_string(),
        None => NOT_RECORDED.to_string(),
    }
}

/// Quote a field when it would break the row otherwise.
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod csv_report_tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid test timestamp")
    }

    fn record(name: &str, check_in: Option<&str>, check_out: Option<&str>) -> AttendanceWithEmployee {
        AttendanceWithEmployee {
            id: 7,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            check_in: check_in.map(ts),
            check_out: check_out.map(ts),
            created_at: ts("2026-08-26T08:02:11"),
            name: name.into(),
            email: "a@x.com".into(),
            employee_code: "E1".into(),
        }
    }

    #[test]
    fn report_starts_with_bom_then_fixed_header() {
        let report = render_report(&[]);
        assert!(report.starts_with(BOM));
        let header = report.trim_start_matches(BOM).lines().next().unwrap();
        assert_eq!(header, "اسم الموظف,رقم الموظف,وقت الحضور,وقت الانصراف,التاريخ");
    }

    #[test]
    fn row_count_matches_record_count() {
        let records = vec![
            record("Ahmed", Some("2026-08-26T08:02:11"), Some("2026-08-26T17:00:00")),
            record("Sara", Some("2026-08-26T09:15:00"), None),
            record("Omar", None, None),
        ];
        let report = render_report(&records);
        assert_eq!(report.lines().count(), records.len() + 1);
    }

    #[test]
    fn complete_record_renders_both_times() {
        let report = render_report(&[record(
            "Ahmed",
            Some("2026-08-26T08:02:11"),
            Some("2026-08-26T17:00:00"),
        )]);
        let row = report.lines().nth(1).unwrap();
        assert_eq!(row, "Ahmed,E1,08:02,17:00,2026-08-26");
    }

    #[test]
    fn missing_timestamps_use_the_placeholder() {
        let report = render_report(&[record("Ahmed", Some("2026-08-26T08:02:11"), None)]);
        let row = report.lines().nth(1).unwrap();
        assert_eq!(row, format!("Ahmed,E1,08:02,{},2026-08-26", "لم يسجل"));
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let report = render_report(&[record("Doe, John \"JD\"", None, None)]);
        let row = report.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Doe, John \"\"JD\"\"\","));
    }

    #[test]
    fn filename_embeds_the_selected_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        assert_eq!(export_filename(date), "attendance_2026-08-26.csv");
    }
}
