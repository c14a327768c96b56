//! Designation Model

use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Designation entity (job title), belongs to a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Department reference
    pub department_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Designation {
    const LABEL: &'static str = "Designation";
    const COLLECTION: &'static str = "hrms_designations";
    const NOT_FOUND: ErrorCode = ErrorCode::DesignationNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create designation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignationCreate {
    pub code: String,
    pub name: String,
    pub department_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl IntoRecord for DesignationCreate {
    type Record = Designation;

    fn into_record(self, id: i64) -> Designation {
        Designation {
            id,
            code: self.code,
            name: self.name,
            department_id: self.department_id,
            description: self.description,
        }
    }
}

/// Update designation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignationUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub department_id: Option<i64>,
    pub description: Option<String>,
}

impl ApplyUpdate for DesignationUpdate {
    type Record = Designation;

    fn apply_to(self, d: &mut Designation) {
        merge(&mut d.code, self.code);
        merge(&mut d.name, self.name);
        merge(&mut d.department_id, self.department_id);
        merge_opt(&mut d.description, self.description);
    }
}
