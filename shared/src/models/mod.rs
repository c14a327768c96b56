//! Data models
//!
//! Shared between the store and its UI collaborators.
//! All IDs are `i64`, assigned by the store as `max(existing) + 1`.
//! JSON field names are camelCase so persisted collections keep the
//! original browser-storage layout.

pub mod attendance;
pub mod category;
pub mod company;
pub mod department;
pub mod designation;
pub mod employee;
pub mod holiday;
pub mod leave_application;
pub mod leave_type;
pub mod manual_entry;
pub mod serde_helpers;
pub mod shift;

// Re-exports
pub use attendance::*;
pub use category::*;
pub use company::*;
pub use department::*;
pub use designation::*;
pub use employee::*;
pub use holiday::*;
pub use leave_application::*;
pub use leave_type::*;
pub use manual_entry::*;
pub use shift::*;

use crate::error::ErrorCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record held in one of the store's collections
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Singular display label used in notifications ("Leave Type")
    const LABEL: &'static str;
    /// Key the whole collection is persisted under
    const COLLECTION: &'static str;
    /// Code reported when an id of this type does not exist
    const NOT_FOUND: ErrorCode;

    fn id(&self) -> i64;

    /// Name shown in "X has been successfully added." style messages
    fn display_name(&self) -> Option<&str> {
        None
    }
}

/// Create payload: a record minus its system-assigned fields
pub trait IntoRecord {
    type Record: Entity;

    fn into_record(self, id: i64) -> Self::Record;
}

/// Update payload: `Some` fields overwrite, `None` fields are left untouched
pub trait ApplyUpdate {
    type Record: Entity;

    fn apply_to(self, record: &mut Self::Record);
}

/// Overwrite `target` when the patch carries a value
#[inline]
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Overwrite an optional field when the patch carries a value
#[inline]
pub(crate) fn merge_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if let Some(v) = value {
        *target = Some(v);
    }
}
