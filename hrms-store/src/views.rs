//! Listing views
//!
//! Rows for the list screens: each record plus the display names of the
//! records it references. A reference that no longer resolves shows as
//! [`UNKNOWN`]. Searches are case-insensitive substring matches; an empty
//! query keeps every row.

use crate::store::Store;
use serde::Serialize;
use shared::models::{Category, Department, Employee, LeaveApplication};

/// Placeholder for a reference that does not resolve
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow<'a> {
    #[serde(flatten)]
    pub employee: &'a Employee,
    pub department_name: &'a str,
    pub designation_name: &'a str,
    pub shift_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRow<'a> {
    #[serde(flatten)]
    pub department: &'a Department,
    pub company_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationRow<'a> {
    #[serde(flatten)]
    pub application: &'a LeaveApplication,
    pub employee_name: &'a str,
    pub leave_type_name: &'a str,
    /// Inclusive calendar days
    pub days: i64,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Store {
    /// Employees matching `query` on name or employee code
    pub fn employee_rows(&self, query: &str) -> Vec<EmployeeRow<'_>> {
        self.employees()
            .iter()
            .filter(|e| contains_ci(&e.name, query) || contains_ci(&e.employee_code, query))
            .map(|employee| EmployeeRow {
                employee,
                department_name: self
                    .get_department_by_id(employee.department_id)
                    .map_or(UNKNOWN, |d| d.name.as_str()),
                designation_name: self
                    .get_designation_by_id(employee.designation_id)
                    .map_or(UNKNOWN, |d| d.name.as_str()),
                shift_name: self
                    .get_shift_by_id(employee.shift_id)
                    .map_or(UNKNOWN, |s| s.name.as_str()),
            })
            .collect()
    }

    /// Departments matching `query` on name or code
    pub fn department_rows(&self, query: &str) -> Vec<DepartmentRow<'_>> {
        self.departments()
            .iter()
            .filter(|d| contains_ci(&d.name, query) || contains_ci(&d.code, query))
            .map(|department| DepartmentRow {
                department,
                company_name: self
                    .get_company_by_id(department.company_id)
                    .map_or(UNKNOWN, |c| c.name.as_str()),
            })
            .collect()
    }

    /// Categories matching `query` on name or code
    pub fn search_categories(&self, query: &str) -> Vec<&Category> {
        self.categories()
            .iter()
            .filter(|c| contains_ci(&c.name, query) || contains_ci(&c.code, query))
            .collect()
    }

    /// Leave applications whose employee name matches `query`
    ///
    /// Applications pointing at a missing employee have no name to match
    /// and are left out for every query, including the empty one.
    pub fn leave_application_rows(&self, query: &str) -> Vec<LeaveApplicationRow<'_>> {
        self.leave_applications()
            .iter()
            .filter_map(|application| {
                let employee = self.get_employee_by_id(application.employee_id)?;
                contains_ci(&employee.name, query).then(|| LeaveApplicationRow {
                    application,
                    employee_name: employee.name.as_str(),
                    leave_type_name: self
                        .get_leave_type_by_id(application.leave_type_id)
                        .map_or(UNKNOWN, |lt| lt.name.as_str()),
                    days: application.day_count(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::RedbStorage;
    use crate::store::StoreOptions;
    use shared::models::{EmployeeUpdate, LeaveApplicationUpdate};

    fn sample_store() -> Store {
        Store::open(RedbStorage::open_in_memory().unwrap(), StoreOptions::default())
    }

    #[test]
    fn test_employee_rows_resolve_names() {
        let store = sample_store();
        let rows = store.employee_rows("");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].department_name, "Information Technology");
        assert_eq!(rows[0].designation_name, "Developer");
        assert_eq!(rows[0].shift_name, "Day Shift");
        assert_eq!(rows[4].shift_name, "Night Shift");
    }

    #[test]
    fn test_employee_search_by_name_or_code() {
        let store = sample_store();
        let by_name: Vec<_> = store.employee_rows("SARAH").iter().map(|r| r.employee.id).collect();
        assert_eq!(by_name, [2]);

        let by_code: Vec<_> = store.employee_rows("emp00").iter().map(|r| r.employee.id).collect();
        assert_eq!(by_code, [1, 2, 3, 4, 5]);

        assert!(store.employee_rows("nobody").is_empty());
    }

    #[test]
    fn test_dangling_reference_shows_unknown() {
        let mut store = sample_store();
        store
            .update_employee(
                3,
                EmployeeUpdate {
                    shift_id: Some(42),
                    ..Default::default()
                },
            )
            .unwrap();

        let rows = store.employee_rows("Mike");
        assert_eq!(rows[0].shift_name, UNKNOWN);
        assert_eq!(rows[0].department_name, "Finance");
    }

    #[test]
    fn test_department_and_category_search() {
        let store = sample_store();
        let rows = store.department_rows("fin");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name, "ABC Corporation");

        let found: Vec<_> = store
            .search_categories("con")
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(found, ["CONT", "CONS"]);
    }

    #[test]
    fn test_leave_rows() {
        let mut store = sample_store();
        let rows = store.leave_application_rows("");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].employee_name, "John Smith");
        assert_eq!(rows[0].leave_type_name, "Casual Leave");
        assert_eq!(rows[0].days, 3);
        assert_eq!(rows[2].days, 12);

        store
            .update_leave_application(
                5,
                LeaveApplicationUpdate {
                    employee_id: Some(99),
                    ..Default::default()
                },
            )
            .unwrap();
        store
            .update_leave_application(
                4,
                LeaveApplicationUpdate {
                    leave_type_id: Some(99),
                    ..Default::default()
                },
            )
            .unwrap();

        // Dangling employee: hidden for every query
        let rows = store.leave_application_rows("");
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.application.id != 5));
        assert!(store.leave_application_rows("wilson").is_empty());

        // Dangling leave type: still listed, name unresolved
        assert_eq!(rows[3].application.id, 4);
        assert_eq!(rows[3].leave_type_name, UNKNOWN);
        assert_eq!(store.leave_application_rows("johnson").len(), 1);
    }

    #[test]
    fn test_row_serializes_flat() {
        let store = sample_store();
        let rows = store.department_rows("HR");
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["code"], "HR");
        assert_eq!(json["companyName"], "ABC Corporation");
    }
}
