//! Attendance Model

use super::serde_helpers::{flexible_date, optional_flexible_date};
use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use chrono::NaiveDate;
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Daily attendance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Half Day")]
    HalfDay,
    #[serde(rename = "On Leave")]
    OnLeave,
}

/// Attendance record for one employee on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    /// "HH:MM"
    pub in_time: String,
    /// "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_departure_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<f64>,
}

impl Entity for Attendance {
    const LABEL: &'static str = "Attendance";
    const COLLECTION: &'static str = "hrms_attendances";
    const NOT_FOUND: ErrorCode = ErrorCode::AttendanceNotFound;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Create attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    pub employee_id: i64,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub in_time: String,
    #[serde(default)]
    pub out_time: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub late_minutes: Option<u32>,
    #[serde(default)]
    pub early_departure_minutes: Option<u32>,
    #[serde(default)]
    pub overtime_hours: Option<f64>,
}

impl IntoRecord for AttendanceCreate {
    type Record = Attendance;

    fn into_record(self, id: i64) -> Attendance {
        Attendance {
            id,
            employee_id: self.employee_id,
            date: self.date,
            in_time: self.in_time,
            out_time: self.out_time,
            status: self.status,
            late_minutes: self.late_minutes,
            early_departure_minutes: self.early_departure_minutes,
            overtime_hours: self.overtime_hours,
        }
    }
}

/// Update attendance payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    pub employee_id: Option<i64>,
    #[serde(default, with = "optional_flexible_date")]
    pub date: Option<NaiveDate>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub late_minutes: Option<u32>,
    pub early_departure_minutes: Option<u32>,
    pub overtime_hours: Option<f64>,
}

impl ApplyUpdate for AttendanceUpdate {
    type Record = Attendance;

    fn apply_to(self, a: &mut Attendance) {
        merge(&mut a.employee_id, self.employee_id);
        merge(&mut a.date, self.date);
        merge(&mut a.in_time, self.in_time);
        merge_opt(&mut a.out_time, self.out_time);
        merge(&mut a.status, self.status);
        merge_opt(&mut a.late_minutes, self.late_minutes);
        merge_opt(&mut a.early_departure_minutes, self.early_departure_minutes);
        merge_opt(&mut a.overtime_hours, self.overtime_hours);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        let json = serde_json::to_string(&AttendanceStatus::HalfDay).unwrap();
        assert_eq!(json, "\"Half Day\"");
        let status: AttendanceStatus = serde_json::from_str("\"On Leave\"").unwrap();
        assert_eq!(status, AttendanceStatus::OnLeave);
    }
}
