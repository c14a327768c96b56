//! Employee Model

use super::serde_helpers::{flexible_date, optional_flexible_date};
use super::{ApplyUpdate, Entity, IntoRecord, merge, merge_opt};
use chrono::NaiveDate;
use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Employee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Optional personal details carried on an employee record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Ayushman Bharat Health Account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abha_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar_card_no: Option<String>,
    #[serde(
        default,
        with = "optional_flexible_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl PersonalDetails {
    /// Field-by-field merge: fields set in `patch` replace ours
    fn merge_from(&mut self, patch: PersonalDetails) {
        merge_opt(&mut self.qualification, patch.qualification);
        merge_opt(&mut self.experience, patch.experience);
        merge_opt(&mut self.previous_company, patch.previous_company);
        merge_opt(&mut self.email, patch.email);
        merge_opt(&mut self.permanent_address, patch.permanent_address);
        merge_opt(&mut self.city, patch.city);
        merge_opt(&mut self.state, patch.state);
        merge_opt(&mut self.country, patch.country);
        merge_opt(&mut self.phone, patch.phone);
        merge_opt(&mut self.mobile, patch.mobile);
        merge_opt(&mut self.blood_group, patch.blood_group);
        merge_opt(&mut self.height, patch.height);
        merge_opt(&mut self.weight, patch.weight);
        merge_opt(&mut self.abha_number, patch.abha_number);
        merge_opt(&mut self.aadhar_card_no, patch.aadhar_card_no);
        merge_opt(&mut self.dob, patch.dob);
        merge_opt(&mut self.bank_account_no, patch.bank_account_no);
        merge_opt(&mut self.bank_name, patch.bank_name);
        merge_opt(&mut self.remarks, patch.remarks);
    }
}

/// Employee entity
///
/// Personal details are flattened so the persisted JSON keeps one flat
/// object per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    /// Attendance-device enrollment code
    pub machine_code: String,
    pub employee_code: String,
    pub name: String,
    #[serde(with = "flexible_date")]
    pub hire_date: NaiveDate,
    pub gender: Gender,
    pub department_id: i64,
    pub category_id: i64,
    pub designation_id: i64,
    pub shift_id: i64,
    pub ot_eligible: bool,
    pub auto_shift: bool,
    pub resigned: bool,
    #[serde(flatten)]
    pub personal: PersonalDetails,
}

impl Entity for Employee {
    const LABEL: &'static str = "Employee";
    const COLLECTION: &'static str = "hrms_employees";
    const NOT_FOUND: ErrorCode = ErrorCode::EmployeeNotFound;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub machine_code: String,
    pub employee_code: String,
    pub name: String,
    #[serde(with = "flexible_date")]
    pub hire_date: NaiveDate,
    pub gender: Gender,
    pub department_id: i64,
    pub category_id: i64,
    pub designation_id: i64,
    pub shift_id: i64,
    #[serde(default)]
    pub ot_eligible: bool,
    #[serde(default)]
    pub auto_shift: bool,
    #[serde(default)]
    pub resigned: bool,
    #[serde(flatten)]
    pub personal: PersonalDetails,
}

impl IntoRecord for EmployeeCreate {
    type Record = Employee;

    fn into_record(self, id: i64) -> Employee {
        Employee {
            id,
            machine_code: self.machine_code,
            employee_code: self.employee_code,
            name: self.name,
            hire_date: self.hire_date,
            gender: self.gender,
            department_id: self.department_id,
            category_id: self.category_id,
            designation_id: self.designation_id,
            shift_id: self.shift_id,
            ot_eligible: self.ot_eligible,
            auto_shift: self.auto_shift,
            resigned: self.resigned,
            personal: self.personal,
        }
    }
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub machine_code: Option<String>,
    pub employee_code: Option<String>,
    pub name: Option<String>,
    #[serde(default, with = "optional_flexible_date")]
    pub hire_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub department_id: Option<i64>,
    pub category_id: Option<i64>,
    pub designation_id: Option<i64>,
    pub shift_id: Option<i64>,
    pub ot_eligible: Option<bool>,
    pub auto_shift: Option<bool>,
    pub resigned: Option<bool>,
    #[serde(flatten)]
    pub personal: PersonalDetails,
}

impl ApplyUpdate for EmployeeUpdate {
    type Record = Employee;

    fn apply_to(self, e: &mut Employee) {
        merge(&mut e.machine_code, self.machine_code);
        merge(&mut e.employee_code, self.employee_code);
        merge(&mut e.name, self.name);
        merge(&mut e.hire_date, self.hire_date);
        merge(&mut e.gender, self.gender);
        merge(&mut e.department_id, self.department_id);
        merge(&mut e.category_id, self.category_id);
        merge(&mut e.designation_id, self.designation_id);
        merge(&mut e.shift_id, self.shift_id);
        merge(&mut e.ot_eligible, self.ot_eligible);
        merge(&mut e.auto_shift, self.auto_shift);
        merge(&mut e.resigned, self.resigned);
        e.personal.merge_from(self.personal);
    }
}
