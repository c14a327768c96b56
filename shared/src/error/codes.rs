//! Unified error codes for the HRMS store
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Master data errors (company, department, category, designation, shift, holiday)
//! - 2xxx: Employee errors
//! - 3xxx: Leave errors (leave types, leave applications)
//! - 4xxx: Attendance errors (manual entries, attendance records)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization
/// and so that UI collaborators can branch on them without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 1xxx: Master data ====================
    /// Company not found
    CompanyNotFound = 1001,
    /// Company is referenced by departments
    CompanyInUse = 1002,
    /// Department not found
    DepartmentNotFound = 1101,
    /// Department is referenced by designations or employees
    DepartmentInUse = 1102,
    /// Category not found
    CategoryNotFound = 1201,
    /// Category is referenced by employees
    CategoryInUse = 1202,
    /// Designation not found
    DesignationNotFound = 1301,
    /// Designation is referenced by employees
    DesignationInUse = 1302,
    /// Shift not found
    ShiftNotFound = 1401,
    /// Shift is referenced by employees
    ShiftInUse = 1402,
    /// Holiday not found
    HolidayNotFound = 1501,

    // ==================== 2xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 2001,
    /// Employee is referenced by leave, manual entry or attendance records
    EmployeeInUse = 2002,

    // ==================== 3xxx: Leave ====================
    /// Leave type not found
    LeaveTypeNotFound = 3001,
    /// Leave type is referenced by leave applications
    LeaveTypeInUse = 3002,
    /// Leave application not found
    LeaveApplicationNotFound = 3101,

    // ==================== 4xxx: Attendance ====================
    /// Manual entry not found
    ManualEntryNotFound = 4001,
    /// Attendance record not found
    AttendanceNotFound = 4101,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Persistence read/write failed
    StorageError = 9002,
    /// Persisted data could not be (de)serialized
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Master data
            ErrorCode::CompanyNotFound => "Company not found",
            ErrorCode::CompanyInUse => "Company is referenced by one or more departments",
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::DepartmentInUse => {
                "Department is referenced by designations or employees"
            }
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryInUse => "Category is referenced by one or more employees",
            ErrorCode::DesignationNotFound => "Designation not found",
            ErrorCode::DesignationInUse => "Designation is referenced by one or more employees",
            ErrorCode::ShiftNotFound => "Shift not found",
            ErrorCode::ShiftInUse => "Shift is referenced by one or more employees",
            ErrorCode::HolidayNotFound => "Holiday not found",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeInUse => {
                "Employee is referenced by leave applications, manual entries, or attendance records"
            }

            // Leave
            ErrorCode::LeaveTypeNotFound => "Leave type not found",
            ErrorCode::LeaveTypeInUse => "Leave type is referenced by one or more leave applications",
            ErrorCode::LeaveApplicationNotFound => "Leave application not found",

            // Attendance
            ErrorCode::ManualEntryNotFound => "Manual entry not found",
            ErrorCode::AttendanceNotFound => "Attendance record not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::SerializationError => "Serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Master data
            1001 => Ok(ErrorCode::CompanyNotFound),
            1002 => Ok(ErrorCode::CompanyInUse),
            1101 => Ok(ErrorCode::DepartmentNotFound),
            1102 => Ok(ErrorCode::DepartmentInUse),
            1201 => Ok(ErrorCode::CategoryNotFound),
            1202 => Ok(ErrorCode::CategoryInUse),
            1301 => Ok(ErrorCode::DesignationNotFound),
            1302 => Ok(ErrorCode::DesignationInUse),
            1401 => Ok(ErrorCode::ShiftNotFound),
            1402 => Ok(ErrorCode::ShiftInUse),
            1501 => Ok(ErrorCode::HolidayNotFound),

            // Employee
            2001 => Ok(ErrorCode::EmployeeNotFound),
            2002 => Ok(ErrorCode::EmployeeInUse),

            // Leave
            3001 => Ok(ErrorCode::LeaveTypeNotFound),
            3002 => Ok(ErrorCode::LeaveTypeInUse),
            3101 => Ok(ErrorCode::LeaveApplicationNotFound),

            // Attendance
            4001 => Ok(ErrorCode::ManualEntryNotFound),
            4101 => Ok(ErrorCode::AttendanceNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9003 => Ok(ErrorCode::SerializationError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
