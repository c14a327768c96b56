//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Master data errors
/// - 2xxx: Employee errors
/// - 3xxx: Leave errors
/// - 4xxx: Attendance errors
/// - 9xxx (and anything else): System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Master data errors (1xxx)
    MasterData,
    /// Employee errors (2xxx)
    Employee,
    /// Leave errors (3xxx)
    Leave,
    /// Attendance errors (4xxx)
    Attendance,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::MasterData,
            2000..3000 => Self::Employee,
            3000..4000 => Self::Leave,
            4000..5000 => Self::Attendance,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::MasterData => "master_data",
            Self::Employee => "employee",
            Self::Leave => "leave",
            Self::Attendance => "attendance",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1002), ErrorCategory::MasterData);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(3101), ErrorCategory::Leave);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Attendance);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ShiftInUse.category(), ErrorCategory::MasterData);
        assert_eq!(ErrorCode::EmployeeInUse.category(), ErrorCategory::Employee);
        assert_eq!(ErrorCode::LeaveTypeInUse.category(), ErrorCategory::Leave);
        assert_eq!(
            ErrorCode::AttendanceNotFound.category(),
            ErrorCategory::Attendance
        );
        assert_eq!(ErrorCode::StorageError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::MasterData).unwrap();
        assert_eq!(json, "\"master_data\"");

        let category: ErrorCategory = serde_json::from_str("\"leave\"").unwrap();
        assert_eq!(category, ErrorCategory::Leave);
    }
}
