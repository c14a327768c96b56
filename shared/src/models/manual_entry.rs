//! Manual Entry Model (attendance punches entered by hand)

use super::serde_helpers::{flexible_date, optional_flexible_date};
use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use chrono::NaiveDate;
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Manual attendance entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEntry {
    pub id: i64,
    pub employee_id: i64,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    /// "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    /// "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Entity for ManualEntry {
    const LABEL: &'static str = "Manual Entry";
    const COLLECTION: &'static str = "hrms_manualEntries";
    const NOT_FOUND: ErrorCode = ErrorCode::ManualEntryNotFound;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Create manual entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEntryCreate {
    pub employee_id: i64,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub out_time: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl IntoRecord for ManualEntryCreate {
    type Record = ManualEntry;

    fn into_record(self, id: i64) -> ManualEntry {
        ManualEntry {
            id,
            employee_id: self.employee_id,
            date: self.date,
            in_time: self.in_time,
            out_time: self.out_time,
            remarks: self.remarks,
        }
    }
}

/// Update manual entry payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEntryUpdate {
    pub employee_id: Option<i64>,
    #[serde(default, with = "optional_flexible_date")]
    pub date: Option<NaiveDate>,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub remarks: Option<String>,
}

impl ApplyUpdate for ManualEntryUpdate {
    type Record = ManualEntry;

    fn apply_to(self, me: &mut ManualEntry) {
        merge(&mut me.employee_id, self.employee_id);
        merge(&mut me.date, self.date);
        merge_opt(&mut me.in_time, self.in_time);
        merge_opt(&mut me.out_time, self.out_time);
        merge_opt(&mut me.remarks, self.remarks);
    }
}
