//! Employees

use super::{Store, StoreResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

impl Store {
    pub fn employees(&self) -> &[Employee] {
        self.employees.as_slice()
    }

    pub fn get_employee_by_id(&self, id: i64) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Foreign keys are stored as given; the form layer picks them from
    /// existing masters.
    pub fn add_employee(&mut self, data: EmployeeCreate) -> StoreResult<Employee> {
        self.add_record(data)
    }

    pub fn update_employee(&mut self, id: i64, patch: EmployeeUpdate) -> StoreResult<Employee> {
        self.update_record(id, patch)
    }

    /// Refused while leave applications, manual entries or attendance
    /// records reference the employee
    pub fn delete_employee(&mut self, id: i64) -> StoreResult<Employee> {
        let blocked = self.employee_blockers(id);
        self.remove_record(id, blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::RedbStorage;
    use crate::store::StoreOptions;
    use chrono::NaiveDate;
    use shared::models::{Gender, PersonalDetails};

    fn sample_store() -> Store {
        Store::open(RedbStorage::open_in_memory().unwrap(), StoreOptions::default())
    }

    fn new_hire() -> EmployeeCreate {
        EmployeeCreate {
            machine_code: "M006".into(),
            employee_code: "EMP006".into(),
            name: "Priya Nair".into(),
            hire_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            gender: Gender::Female,
            department_id: 2,
            category_id: 2,
            designation_id: 2,
            shift_id: 3,
            ot_eligible: false,
            auto_shift: true,
            resigned: false,
            personal: PersonalDetails {
                email: Some("priya.nair@example.com".into()),
                city: Some("Kochi".into()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_add_employee_keeps_personal_details() {
        let mut store = sample_store();
        let created = store.add_employee(new_hire()).unwrap();

        assert_eq!(created.id, 6);
        let stored = store.get_employee_by_id(6).unwrap();
        assert_eq!(stored.personal.city.as_deref(), Some("Kochi"));
        assert_eq!(stored.personal.mobile, None);
    }

    #[test]
    fn test_update_personal_field_only() {
        let mut store = sample_store();
        let updated = store
            .update_employee(
                1,
                EmployeeUpdate {
                    resigned: Some(true),
                    personal: PersonalDetails {
                        blood_group: Some("O+".into()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.resigned);
        assert_eq!(updated.personal.blood_group.as_deref(), Some("O+"));
        // untouched
        assert_eq!(
            updated.personal.email.as_deref(),
            Some("john.smith@example.com")
        );
        assert_eq!(updated.shift_id, 2);
    }

    #[test]
    fn test_employee_with_history_cannot_be_deleted() {
        let mut store = sample_store();
        let err = store.delete_employee(1).unwrap_err();
        assert_eq!(err.code(), shared::ErrorCode::EmployeeInUse);
        assert_eq!(store.employees().len(), 5);

        let created = store.add_employee(new_hire()).unwrap();
        let removed = store.delete_employee(created.id).unwrap();
        assert_eq!(removed.name, "Priya Nair");
    }
}
