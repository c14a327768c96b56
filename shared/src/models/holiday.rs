//! Holiday Model

use super::serde_helpers::{flexible_date, optional_flexible_date};
use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use chrono::NaiveDate;
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Holiday calendar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: i64,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_optional: bool,
}

impl Entity for Holiday {
    const LABEL: &'static str = "Holiday";
    const COLLECTION: &'static str = "hrms_holidays";
    const NOT_FOUND: ErrorCode = ErrorCode::HolidayNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create holiday payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCreate {
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_optional: bool,
}

impl IntoRecord for HolidayCreate {
    type Record = Holiday;

    fn into_record(self, id: i64) -> Holiday {
        Holiday {
            id,
            date: self.date,
            name: self.name,
            description: self.description,
            is_optional: self.is_optional,
        }
    }
}

/// Update holiday payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayUpdate {
    #[serde(default, with = "optional_flexible_date")]
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_optional: Option<bool>,
}

impl ApplyUpdate for HolidayUpdate {
    type Record = Holiday;

    fn apply_to(self, h: &mut Holiday) {
        merge(&mut h.date, self.date);
        merge(&mut h.name, self.name);
        merge_opt(&mut h.description, self.description);
        merge(&mut h.is_optional, self.is_optional);
    }
}
