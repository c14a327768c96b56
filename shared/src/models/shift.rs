//! Shift Model (work timing master)

use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Shift entity
///
/// Start and end times are "HH:MM" strings. A shift whose end time is
/// earlier than its start time (e.g. 22:00 to 06:00) runs past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    /// Late-arrival tolerance in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period: Option<u32>,
    pub working_hours: f64,
    pub is_active: bool,
}

impl Entity for Shift {
    const LABEL: &'static str = "Shift";
    const COLLECTION: &'static str = "hrms_shifts";
    const NOT_FOUND: ErrorCode = ErrorCode::ShiftNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCreate {
    pub code: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub grace_period: Option<u32>,
    pub working_hours: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl IntoRecord for ShiftCreate {
    type Record = Shift;

    fn into_record(self, id: i64) -> Shift {
        Shift {
            id,
            code: self.code,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            grace_period: self.grace_period,
            working_hours: self.working_hours,
            is_active: self.is_active,
        }
    }
}

/// Update shift payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub grace_period: Option<u32>,
    pub working_hours: Option<f64>,
    pub is_active: Option<bool>,
}

impl ApplyUpdate for ShiftUpdate {
    type Record = Shift;

    fn apply_to(self, s: &mut Shift) {
        merge(&mut s.code, self.code);
        merge(&mut s.name, self.name);
        merge(&mut s.start_time, self.start_time);
        merge(&mut s.end_time, self.end_time);
        merge_opt(&mut s.grace_period, self.grace_period);
        merge(&mut s.working_hours, self.working_hours);
        merge(&mut s.is_active, self.is_active);
    }
}
