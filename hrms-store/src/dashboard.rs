//! Dashboard summary

use crate::store::Store;
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{AttendanceStatus, LeaveStatus};

/// Headline counts for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub total_employees: usize,
    /// Employees not marked resigned
    pub active_employees: usize,
    pub pending_leaves: usize,
    /// Approved leave applications covering `date`
    pub on_leave: usize,
    /// Attendance records for `date` with status Present
    pub present: usize,
    /// Overtime hours across all attendance records
    pub overtime_hours: f64,
}

impl Store {
    pub fn dashboard_summary(&self, date: NaiveDate) -> DashboardSummary {
        let employees = self.employees();
        let leaves = self.leave_applications();
        let attendances = self.attendances();

        DashboardSummary {
            date,
            total_employees: employees.len(),
            active_employees: employees.iter().filter(|e| !e.resigned).count(),
            pending_leaves: leaves
                .iter()
                .filter(|la| la.status == LeaveStatus::Pending)
                .count(),
            on_leave: leaves
                .iter()
                .filter(|la| la.status == LeaveStatus::Approved && la.covers(date))
                .count(),
            present: attendances
                .iter()
                .filter(|a| a.date == date && a.status == AttendanceStatus::Present)
                .count(),
            overtime_hours: attendances.iter().filter_map(|a| a.overtime_hours).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::persistence::RedbStorage;
    use crate::store::{Store, StoreOptions};
    use chrono::NaiveDate;

    #[test]
    fn test_sample_summary() {
        let store = Store::open(RedbStorage::open_in_memory().unwrap(), StoreOptions::default());

        let summary = store.dashboard_summary(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.active_employees, 5);
        assert_eq!(summary.pending_leaves, 2);
        assert_eq!(summary.on_leave, 0);
        assert_eq!(summary.present, 3);
        assert_eq!(summary.overtime_hours, 1.5);

        // John Smith's approved casual leave
        let summary = store.dashboard_summary(NaiveDate::from_ymd_opt(2023, 10, 16).unwrap());
        assert_eq!(summary.on_leave, 1);
        assert_eq!(summary.present, 0);
    }
}
