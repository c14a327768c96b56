//! Leave Type Model

use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Leave type master (casual, sick, annual, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Yearly entitlement in days
    pub allowed_days: u32,
    /// Whether unused days roll over into the next year
    pub carry_forward: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_carry_forward_days: Option<u32>,
}

impl Entity for LeaveType {
    const LABEL: &'static str = "Leave Type";
    const COLLECTION: &'static str = "hrms_leaveTypes";
    const NOT_FOUND: ErrorCode = ErrorCode::LeaveTypeNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create leave type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeCreate {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub allowed_days: u32,
    #[serde(default)]
    pub carry_forward: bool,
    #[serde(default)]
    pub max_carry_forward_days: Option<u32>,
}

impl IntoRecord for LeaveTypeCreate {
    type Record = LeaveType;

    fn into_record(self, id: i64) -> LeaveType {
        LeaveType {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            allowed_days: self.allowed_days,
            carry_forward: self.carry_forward,
            max_carry_forward_days: self.max_carry_forward_days,
        }
    }
}

/// Update leave type payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub allowed_days: Option<u32>,
    pub carry_forward: Option<bool>,
    pub max_carry_forward_days: Option<u32>,
}

impl ApplyUpdate for LeaveTypeUpdate {
    type Record = LeaveType;

    fn apply_to(self, lt: &mut LeaveType) {
        merge(&mut lt.code, self.code);
        merge(&mut lt.name, self.name);
        merge_opt(&mut lt.description, self.description);
        merge(&mut lt.allowed_days, self.allowed_days);
        merge(&mut lt.carry_forward, self.carry_forward);
        merge_opt(&mut lt.max_carry_forward_days, self.max_carry_forward_days);
    }
}
