//! Pure model of the tracker screen's data-synchronization flow.
//!
//! An immutable state value plus a reducer: each action produces the next
//! state and the refresh effects the caller must run. The lists are only
//! ever replaced wholesale by a fetch result, never patched locally.
//! Nothing in this module touches the network or a rendering layer.

use chrono::NaiveDate;

use crate::model::attendance::{AttendanceStatus, AttendanceWithEmployee};
use crate::model::employee::Employee;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub employee_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceWithEmployee>,
    pub selected_date: NaiveDate,
    pub loading: bool,
    pub show_add_employee: bool,
    pub draft: EmployeeDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The operator picked a date; both lists go stale at once.
    SelectDate(NaiveDate),
    EmployeesFetched(Vec<Employee>),
    /// A day's records arrived. Written unguarded: a late response for a
    /// previously selected date still lands (known gap, kept).
    RecordsFetched(Vec<AttendanceWithEmployee>),
    FetchFailed,
    CheckInSucceeded,
    CheckOutSucceeded,
    EmployeeAdded,
    MutationFailed,
    OpenAddEmployee,
    CloseAddEmployee,
    EditDraft(EmployeeDraft),
}

/// What the controller must re-fetch after a reduction. Every update path is
/// a full re-fetch; no list is patched locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchEmployees,
    FetchRecords,
}

impl TrackerState {
    /// Fresh state for the given day. The initial load fetches both lists.
    pub fn new(selected_date: NaiveDate) -> (Self, Vec<Effect>) {
        let state = TrackerState {
            employees: Vec::new(),
            records: Vec::new(),
            selected_date,
            loading: true,
            show_add_employee: false,
            draft: EmployeeDraft::default(),
        };
        (state, vec![Effect::FetchEmployees, Effect::FetchRecords])
    }

    /// The loaded record for an employee, if any. Assumes at most one record
    /// per employee and day; with duplicates the most recent one wins since
    /// records arrive newest-first.
    pub fn record_for(&self, employee_id: u64) -> Option<&AttendanceWithEmployee> {
        self.records.iter().find(|r| r.employee_id == employee_id)
    }

    /// Which action button the employee's row gets today.
    pub fn status_for(&self, employee_id: u64) -> AttendanceStatus {
        self.record_for(employee_id)
            .map(AttendanceWithEmployee::status)
            .unwrap_or(AttendanceStatus::NotCheckedIn)
    }
}

pub fn reduce(state: TrackerState, action: Action) -> (TrackerState, Vec<Effect>) {
    let mut next = state;
    match action {
        Action::SelectDate(date) => {
            next.selected_date = date;
            next.loading = true;
            (next, vec![Effect::FetchEmployees, Effect::FetchRecords])
        }
        Action::EmployeesFetched(employees) => {
            next.employees = employees;
            (next, vec![])
        }
        Action::RecordsFetched(records) => {
            next.records = records;
            next.loading = false;
            (next, vec![])
        }
        Action::FetchFailed => {
            // Lists keep their last successful contents.
            next.loading = false;
            (next, vec![])
        }
        Action::CheckInSucceeded | Action::CheckOutSucceeded => {
            (next, vec![Effect::FetchRecords])
        }
        Action::EmployeeAdded => {
            next.draft = EmployeeDraft::default();
            next.show_add_employee = false;
            (next, vec![Effect::FetchEmployees])
        }
        Action::MutationFailed => (next, vec![]),
        Action::OpenAddEmployee => {
            next.show_add_employee = true;
            (next, vec![])
        }
        Action::CloseAddEmployee => {
            next.show_add_employee = false;
            (next, vec![])
        }
        Action::EditDraft(draft) => {
            next.draft = draft;
            (next, vec![])
        }
    }
}
