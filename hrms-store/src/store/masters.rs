//! Master data: companies, departments, categories, designations,
//! shifts, holidays and leave types

use super::{Store, StoreResult};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Company, CompanyCreate, CompanyUpdate, Department,
    DepartmentCreate, DepartmentUpdate, Designation, DesignationCreate, DesignationUpdate,
    Holiday, HolidayCreate, HolidayUpdate, LeaveType, LeaveTypeCreate, LeaveTypeUpdate, Shift,
    ShiftCreate, ShiftUpdate,
};

impl Store {
    // ========== Companies ==========

    pub fn companies(&self) -> &[Company] {
        self.companies.as_slice()
    }

    pub fn get_company_by_id(&self, id: i64) -> Option<&Company> {
        self.companies.get(id)
    }

    pub fn add_company(&mut self, data: CompanyCreate) -> StoreResult<Company> {
        self.add_record(data)
    }

    pub fn update_company(&mut self, id: i64, patch: CompanyUpdate) -> StoreResult<Company> {
        self.update_record(id, patch)
    }

    /// Refused while any department belongs to the company
    pub fn delete_company(&mut self, id: i64) -> StoreResult<Company> {
        let blocked = self.company_blockers(id);
        self.remove_record(id, blocked)
    }

    // ========== Departments ==========

    pub fn departments(&self) -> &[Department] {
        self.departments.as_slice()
    }

    pub fn get_department_by_id(&self, id: i64) -> Option<&Department> {
        self.departments.get(id)
    }

    pub fn add_department(&mut self, data: DepartmentCreate) -> StoreResult<Department> {
        self.add_record(data)
    }

    pub fn update_department(
        &mut self,
        id: i64,
        patch: DepartmentUpdate,
    ) -> StoreResult<Department> {
        self.update_record(id, patch)
    }

    /// Refused while designations or employees point at the department
    pub fn delete_department(&mut self, id: i64) -> StoreResult<Department> {
        let blocked = self.department_blockers(id);
        self.remove_record(id, blocked)
    }

    // ========== Categories ==========

    pub fn categories(&self) -> &[Category] {
        self.categories.as_slice()
    }

    pub fn get_category_by_id(&self, id: i64) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn add_category(&mut self, data: CategoryCreate) -> StoreResult<Category> {
        self.add_record(data)
    }

    pub fn update_category(&mut self, id: i64, patch: CategoryUpdate) -> StoreResult<Category> {
        self.update_record(id, patch)
    }

    pub fn delete_category(&mut self, id: i64) -> StoreResult<Category> {
        let blocked = self.category_blockers(id);
        self.remove_record(id, blocked)
    }

    // ========== Designations ==========

    pub fn designations(&self) -> &[Designation] {
        self.designations.as_slice()
    }

    pub fn get_designation_by_id(&self, id: i64) -> Option<&Designation> {
        self.designations.get(id)
    }

    pub fn add_designation(&mut self, data: DesignationCreate) -> StoreResult<Designation> {
        self.add_record(data)
    }

    pub fn update_designation(
        &mut self,
        id: i64,
        patch: DesignationUpdate,
    ) -> StoreResult<Designation> {
        self.update_record(id, patch)
    }

    pub fn delete_designation(&mut self, id: i64) -> StoreResult<Designation> {
        let blocked = self.designation_blockers(id);
        self.remove_record(id, blocked)
    }

    // ========== Shifts ==========

    pub fn shifts(&self) -> &[Shift] {
        self.shifts.as_slice()
    }

    pub fn get_shift_by_id(&self, id: i64) -> Option<&Shift> {
        self.shifts.get(id)
    }

    pub fn add_shift(&mut self, data: ShiftCreate) -> StoreResult<Shift> {
        self.add_record(data)
    }

    pub fn update_shift(&mut self, id: i64, patch: ShiftUpdate) -> StoreResult<Shift> {
        self.update_record(id, patch)
    }

    pub fn delete_shift(&mut self, id: i64) -> StoreResult<Shift> {
        let blocked = self.shift_blockers(id);
        self.remove_record(id, blocked)
    }

    // ========== Holidays ==========

    pub fn holidays(&self) -> &[Holiday] {
        self.holidays.as_slice()
    }

    pub fn get_holiday_by_id(&self, id: i64) -> Option<&Holiday> {
        self.holidays.get(id)
    }

    pub fn add_holiday(&mut self, data: HolidayCreate) -> StoreResult<Holiday> {
        self.add_record(data)
    }

    pub fn update_holiday(&mut self, id: i64, patch: HolidayUpdate) -> StoreResult<Holiday> {
        self.update_record(id, patch)
    }

    /// Holidays have no dependents
    pub fn delete_holiday(&mut self, id: i64) -> StoreResult<Holiday> {
        self.remove_record(id, None)
    }

    // ========== Leave types ==========

    pub fn leave_types(&self) -> &[LeaveType] {
        self.leave_types.as_slice()
    }

    pub fn get_leave_type_by_id(&self, id: i64) -> Option<&LeaveType> {
        self.leave_types.get(id)
    }

    pub fn add_leave_type(&mut self, data: LeaveTypeCreate) -> StoreResult<LeaveType> {
        self.add_record(data)
    }

    pub fn update_leave_type(
        &mut self,
        id: i64,
        patch: LeaveTypeUpdate,
    ) -> StoreResult<LeaveType> {
        self.update_record(id, patch)
    }

    /// Refused while any leave application uses the type
    pub fn delete_leave_type(&mut self, id: i64) -> StoreResult<LeaveType> {
        let blocked = self.leave_type_blockers(id);
        self.remove_record(id, blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::RedbStorage;
    use crate::store::StoreOptions;
    use chrono::NaiveDate;

    fn sample_store() -> Store {
        Store::open(RedbStorage::open_in_memory().unwrap(), StoreOptions::default())
    }

    #[test]
    fn test_add_company_assigns_next_id() {
        let mut store = sample_store();
        let created = store
            .add_company(CompanyCreate {
                code: "HIJ987".into(),
                name: "HIJ Holdings".into(),
                email: "hello@hij.com".into(),
                phone: "555-000-1111".into(),
                address: "1 Harbour Rd".into(),
                gst_no: Some("22AAAAA0000A1Z5".into()),
                pan: None,
                website: None,
                logo: None,
            })
            .unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(store.get_company_by_id(6), Some(&created));
        assert_eq!(store.companies().len(), 6);
    }

    #[test]
    fn test_add_designation_then_get() {
        let mut store = sample_store();
        let created = store
            .add_designation(DesignationCreate {
                code: "QA".into(),
                name: "Tester".into(),
                department_id: 1,
                description: Some("Quality Assurance".into()),
            })
            .unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(created.department_id, 1);
        assert_eq!(store.get_designation_by_id(6), Some(&created));
        assert_eq!(store.designations().len(), 6);
    }

    #[test]
    fn test_add_shift_then_get() {
        let mut store = sample_store();
        let created = store
            .add_shift(ShiftCreate {
                code: "SPLIT".into(),
                name: "Split Shift".into(),
                start_time: "10:00".into(),
                end_time: "19:00".into(),
                grace_period: None,
                working_hours: 7.5,
                is_active: false,
            })
            .unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(created.grace_period, None);
        assert!(!created.is_active);
        assert_eq!(store.get_shift_by_id(6), Some(&created));
    }

    #[test]
    fn test_add_leave_type_then_get() {
        let mut store = sample_store();
        let created = store
            .add_leave_type(LeaveTypeCreate {
                code: "CO".into(),
                name: "Compensatory Off".into(),
                description: None,
                allowed_days: 6,
                carry_forward: true,
                max_carry_forward_days: Some(2),
            })
            .unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(created.max_carry_forward_days, Some(2));
        assert_eq!(store.get_leave_type_by_id(6), Some(&created));
        assert_eq!(store.leave_types().last(), Some(&created));
    }

    #[test]
    fn test_update_shift_touches_only_given_fields() {
        let mut store = sample_store();
        let before = store.get_shift_by_id(5).unwrap().clone();

        let after = store
            .update_shift(
                5,
                ShiftUpdate {
                    grace_period: Some(45),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(after.grace_period, Some(45));
        assert!(!after.is_active);
        assert_eq!(after.code, before.code);
        assert_eq!(after.start_time, before.start_time);
        assert_eq!(after.working_hours, before.working_hours);
    }

    #[test]
    fn test_delete_holiday_is_unconditional() {
        let mut store = sample_store();
        let removed = store.delete_holiday(3).unwrap();
        assert_eq!(removed.name, "Independence Day");
        assert_eq!(removed.date, NaiveDate::from_ymd_opt(2023, 8, 15).unwrap());
        assert!(store.get_holiday_by_id(3).is_none());
        assert_eq!(store.holidays().len(), 4);
    }

    #[test]
    fn test_blocked_delete_leaves_collection_unchanged() {
        let mut store = sample_store();
        let mut rx = store.subscribe();

        let err = store.delete_leave_type(1).unwrap_err();
        assert!(err.is_in_use());
        assert_eq!(err.code(), shared::ErrorCode::LeaveTypeInUse);
        assert_eq!(store.leave_types().len(), 5);

        let note = rx.try_recv().unwrap();
        assert!(note.is_destructive());
        assert_eq!(note.title, "Cannot Delete Leave Type");
        assert_eq!(
            note.message,
            "This leave type is referenced by one or more leave applications."
        );
    }

    #[test]
    fn test_free_master_deletes() {
        let mut store = sample_store();
        let mut rx = store.subscribe();

        // MORN shift is unused by the sample employees
        let removed = store.delete_shift(1).unwrap();
        assert_eq!(removed.code, "MORN");

        let note = rx.try_recv().unwrap();
        assert_eq!(note.title, "Shift Deleted");
        assert_eq!(note.message, "Morning Shift has been successfully deleted.");
    }
}
