//! Referential-integrity rules
//!
//! A record may be deleted only while nothing references it:
//!
//! | Target | Blocked by |
//! |--------|------------|
//! | Company | `Department.companyId` |
//! | Department | `Designation.departmentId`, `Employee.departmentId` |
//! | Category | `Employee.categoryId` |
//! | Designation | `Employee.designationId` |
//! | Shift | `Employee.shiftId` |
//! | Leave Type | `LeaveApplication.leaveTypeId` |
//! | Employee | `LeaveApplication`, `ManualEntry`, `Attendance` `.employeeId` |
//!
//! Holidays, leave applications, manual entries and attendance records
//! have no dependents. Every rule is a linear scan of the dependent
//! collections.

use super::{Collection, Dependents, Store};
use shared::ErrorCode;
use shared::models::Entity;

/// Why a delete was refused
#[derive(Debug)]
pub(super) struct Blocked {
    pub code: ErrorCode,
    pub message: &'static str,
    pub dependents: Vec<Dependents>,
}

impl Blocked {
    /// `Some` when at least one dependent count is non-zero
    fn check(
        code: ErrorCode,
        message: &'static str,
        counts: impl IntoIterator<Item = Dependents>,
    ) -> Option<Self> {
        let dependents: Vec<_> = counts.into_iter().filter(|d| d.count > 0).collect();
        (!dependents.is_empty()).then_some(Self {
            code,
            message,
            dependents,
        })
    }
}

fn count<T: Entity>(collection: &Collection<T>, pred: impl Fn(&T) -> bool) -> Dependents {
    Dependents {
        entity: T::LABEL,
        count: collection.count_where(pred),
    }
}

impl Store {
    pub(super) fn company_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::CompanyInUse,
            "This company is referenced by one or more departments.",
            [count(&self.departments, |d| d.company_id == id)],
        )
    }

    pub(super) fn department_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::DepartmentInUse,
            "This department is referenced by designations or employees.",
            [
                count(&self.designations, |d| d.department_id == id),
                count(&self.employees, |e| e.department_id == id),
            ],
        )
    }

    pub(super) fn category_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::CategoryInUse,
            "This category is referenced by one or more employees.",
            [count(&self.employees, |e| e.category_id == id)],
        )
    }

    pub(super) fn designation_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::DesignationInUse,
            "This designation is referenced by one or more employees.",
            [count(&self.employees, |e| e.designation_id == id)],
        )
    }

    pub(super) fn shift_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::ShiftInUse,
            "This shift is referenced by one or more employees.",
            [count(&self.employees, |e| e.shift_id == id)],
        )
    }

    pub(super) fn leave_type_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::LeaveTypeInUse,
            "This leave type is referenced by one or more leave applications.",
            [count(&self.leave_applications, |la| la.leave_type_id == id)],
        )
    }

    pub(super) fn employee_blockers(&self, id: i64) -> Option<Blocked> {
        Blocked::check(
            ErrorCode::EmployeeInUse,
            "This employee is referenced by leave applications, manual entries, or attendance records.",
            [
                count(&self.leave_applications, |la| la.employee_id == id),
                count(&self.manual_entries, |me| me.employee_id == id),
                count(&self.attendances, |a| a.employee_id == id),
            ],
        )
    }
}
