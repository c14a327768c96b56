//! Shared types for the HRMS master-data store
//!
//! Entity models with their create/update payloads, the unified error
//! type, outcome notifications and small utilities. Used by the store
//! and by any UI collaborator that talks to it.

pub mod error;
pub mod models;
pub mod notification;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use notification::{Notification, Severity};
pub use serde::{Deserialize, Serialize};
