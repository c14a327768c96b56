//! Department Model

use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Department entity, belongs to a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Company reference
    pub company_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Department {
    const LABEL: &'static str = "Department";
    const COLLECTION: &'static str = "hrms_departments";
    const NOT_FOUND: ErrorCode = ErrorCode::DepartmentNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    pub code: String,
    pub name: String,
    pub company_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl IntoRecord for DepartmentCreate {
    type Record = Department;

    fn into_record(self, id: i64) -> Department {
        Department {
            id,
            code: self.code,
            name: self.name,
            company_id: self.company_id,
            description: self.description,
        }
    }
}

/// Update department payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub company_id: Option<i64>,
    pub description: Option<String>,
}

impl ApplyUpdate for DepartmentUpdate {
    type Record = Department;

    fn apply_to(self, d: &mut Department) {
        merge(&mut d.code, self.code);
        merge(&mut d.name, self.name);
        merge(&mut d.company_id, self.company_id);
        merge_opt(&mut d.description, self.description);
    }
}
