//! Unified error system for the HRMS store
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Master data errors
//! - 2xxx: Employee errors
//! - 3xxx: Leave errors
//! - 4xxx: Attendance errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCategory, ErrorCode};
//!
//! let err = AppError::in_use(ErrorCode::ShiftInUse, "This shift is referenced by one or more employees.")
//!     .with_detail("id", 2);
//! assert_eq!(err.code.category(), ErrorCategory::MasterData);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
