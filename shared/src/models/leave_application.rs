//! Leave Application Model

use super::serde_helpers::{flexible_date, optional_flexible_date};
use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use chrono::{DateTime, NaiveDate, Utc};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Whether the leave covers full days or half days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayDuration {
    #[default]
    Full,
    Half,
}

/// Leave application status
///
/// Transitions are not guarded: approve and reject may be applied from any
/// status, including an already decided one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leave application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: i64,
    pub employee_id: i64,
    pub leave_type_id: i64,
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,
    pub day_duration: DayDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub status: LeaveStatus,
    /// Submission time (UTC)
    pub applied_on: DateTime<Utc>,
}

impl LeaveApplication {
    /// Calendar days covered, both ends inclusive
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether `date` falls inside the leave period
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Entity for LeaveApplication {
    const LABEL: &'static str = "Leave Application";
    const COLLECTION: &'static str = "hrms_leaveApplications";
    const NOT_FOUND: ErrorCode = ErrorCode::LeaveApplicationNotFound;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Submit leave application payload
///
/// Status and submission time are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationCreate {
    pub employee_id: i64,
    pub leave_type_id: i64,
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub day_duration: DayDuration,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl IntoRecord for LeaveApplicationCreate {
    type Record = LeaveApplication;

    fn into_record(self, id: i64) -> LeaveApplication {
        LeaveApplication {
            id,
            employee_id: self.employee_id,
            leave_type_id: self.leave_type_id,
            start_date: self.start_date,
            end_date: self.end_date,
            day_duration: self.day_duration,
            remarks: self.remarks,
            status: LeaveStatus::Pending,
            applied_on: Utc::now(),
        }
    }
}

/// Update leave application payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationUpdate {
    pub employee_id: Option<i64>,
    pub leave_type_id: Option<i64>,
    #[serde(default, with = "optional_flexible_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "optional_flexible_date")]
    pub end_date: Option<NaiveDate>,
    pub day_duration: Option<DayDuration>,
    pub remarks: Option<String>,
    pub status: Option<LeaveStatus>,
    pub applied_on: Option<DateTime<Utc>>,
}

impl ApplyUpdate for LeaveApplicationUpdate {
    type Record = LeaveApplication;

    fn apply_to(self, la: &mut LeaveApplication) {
        merge(&mut la.employee_id, self.employee_id);
        merge(&mut la.leave_type_id, self.leave_type_id);
        merge(&mut la.start_date, self.start_date);
        merge(&mut la.end_date, self.end_date);
        merge(&mut la.day_duration, self.day_duration);
        merge_opt(&mut la.remarks, self.remarks);
        merge(&mut la.status, self.status);
        merge(&mut la.applied_on, self.applied_on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_application_is_pending() {
        let before = Utc::now();
        let la = LeaveApplicationCreate {
            employee_id: 1,
            leave_type_id: 1,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 3),
            day_duration: DayDuration::Full,
            remarks: None,
        }
        .into_record(6);

        assert_eq!(la.id, 6);
        assert_eq!(la.status, LeaveStatus::Pending);
        assert!(la.applied_on >= before && la.applied_on <= Utc::now());
        assert_eq!(la.day_count(), 3);
        assert!(la.covers(date(2024, 3, 2)));
        assert!(!la.covers(date(2024, 3, 4)));
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"Approved\""
        );
        assert_eq!(
            serde_json::from_str::<DayDuration>("\"half\"").unwrap(),
            DayDuration::Half
        );
    }

    #[test]
    fn test_update_accepts_browser_dates() {
        let patch: LeaveApplicationUpdate = serde_json::from_str(
            r#"{"startDate":"2024-01-26T00:00:00.000Z","endDate":"2024-01-28"}"#,
        )
        .unwrap();
        assert_eq!(patch.start_date, Some(date(2024, 1, 26)));
        assert_eq!(patch.end_date, Some(date(2024, 1, 28)));
        assert_eq!(patch.status, None);
    }
}
