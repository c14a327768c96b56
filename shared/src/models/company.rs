//! Company Model

use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Company entity, root of the department hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Logo image reference (path or data URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Entity for Company {
    const LABEL: &'static str = "Company";
    const COLLECTION: &'static str = "hrms_companies";
    const NOT_FOUND: ErrorCode = ErrorCode::CompanyNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create company payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCreate {
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub gst_no: Option<String>,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl IntoRecord for CompanyCreate {
    type Record = Company;

    fn into_record(self, id: i64) -> Company {
        Company {
            id,
            code: self.code,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            gst_no: self.gst_no,
            pan: self.pan,
            website: self.website,
            logo: self.logo,
        }
    }
}

/// Update company payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gst_no: Option<String>,
    pub pan: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
}

impl ApplyUpdate for CompanyUpdate {
    type Record = Company;

    fn apply_to(self, c: &mut Company) {
        merge(&mut c.code, self.code);
        merge(&mut c.name, self.name);
        merge(&mut c.email, self.email);
        merge(&mut c.phone, self.phone);
        merge(&mut c.address, self.address);
        merge_opt(&mut c.gst_no, self.gst_no);
        merge_opt(&mut c.pan, self.pan);
        merge_opt(&mut c.website, self.website);
        merge_opt(&mut c.logo, self.logo);
    }
}
