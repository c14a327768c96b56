//! Category Model (employee classification: permanent, contract, ...)

use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Category {
    const LABEL: &'static str = "Category";
    const COLLECTION: &'static str = "hrms_categories";
    const NOT_FOUND: ErrorCode = ErrorCode::CategoryNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl IntoRecord for CategoryCreate {
    type Record = Category;

    fn into_record(self, id: i64) -> Category {
        Category {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
        }
    }
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ApplyUpdate for CategoryUpdate {
    type Record = Category;

    fn apply_to(self, c: &mut Category) {
        merge(&mut c.code, self.code);
        merge(&mut c.name, self.name);
        merge_opt(&mut c.description, self.description);
    }
}
