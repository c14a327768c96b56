//! Manual punch entries and daily attendance records

use super::{Store, StoreResult};
use shared::models::{
    Attendance, AttendanceCreate, AttendanceUpdate, ManualEntry, ManualEntryCreate,
    ManualEntryUpdate,
};

impl Store {
    // ========== Manual entries ==========

    pub fn manual_entries(&self) -> &[ManualEntry] {
        self.manual_entries.as_slice()
    }

    pub fn get_manual_entry_by_id(&self, id: i64) -> Option<&ManualEntry> {
        self.manual_entries.get(id)
    }

    pub fn add_manual_entry(&mut self, data: ManualEntryCreate) -> StoreResult<ManualEntry> {
        self.add_record(data)
    }

    pub fn update_manual_entry(
        &mut self,
        id: i64,
        patch: ManualEntryUpdate,
    ) -> StoreResult<ManualEntry> {
        self.update_record(id, patch)
    }

    pub fn delete_manual_entry(&mut self, id: i64) -> StoreResult<ManualEntry> {
        self.remove_record(id, None)
    }

    // ========== Attendance ==========

    pub fn attendances(&self) -> &[Attendance] {
        self.attendances.as_slice()
    }

    pub fn get_attendance_by_id(&self, id: i64) -> Option<&Attendance> {
        self.attendances.get(id)
    }

    pub fn add_attendance(&mut self, data: AttendanceCreate) -> StoreResult<Attendance> {
        self.add_record(data)
    }

    pub fn update_attendance(
        &mut self,
        id: i64,
        patch: AttendanceUpdate,
    ) -> StoreResult<Attendance> {
        self.update_record(id, patch)
    }

    pub fn delete_attendance(&mut self, id: i64) -> StoreResult<Attendance> {
        self.remove_record(id, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::RedbStorage;
    use crate::store::StoreOptions;
    use chrono::NaiveDate;
    use shared::models::AttendanceStatus;

    fn sample_store() -> Store {
        Store::open(RedbStorage::open_in_memory().unwrap(), StoreOptions::default())
    }

    #[test]
    fn test_manual_entry_messages_use_label() {
        let mut store = sample_store();
        let mut rx = store.subscribe();

        let created = store
            .add_manual_entry(ManualEntryCreate {
                employee_id: 4,
                date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
                in_time: Some("10:05".into()),
                out_time: None,
                remarks: Some("Card reader offline".into()),
            })
            .unwrap();
        assert_eq!(created.id, 4);

        let note = rx.try_recv().unwrap();
        assert_eq!(note.title, "Manual Entry Added");
        assert_eq!(note.message, "Manual entry has been successfully added.");

        store.delete_manual_entry(created.id).unwrap();
        let note = rx.try_recv().unwrap();
        assert_eq!(note.title, "Manual Entry Deleted");
        assert_eq!(note.message, "Manual entry has been successfully deleted.");
    }

    #[test]
    fn test_attendance_lifecycle() {
        let mut store = sample_store();
        let created = store
            .add_attendance(AttendanceCreate {
                employee_id: 4,
                date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
                in_time: "09:45".into(),
                out_time: None,
                status: AttendanceStatus::HalfDay,
                late_minutes: Some(45),
                early_departure_minutes: None,
                overtime_hours: None,
            })
            .unwrap();
        assert_eq!(created.id, 4);

        let updated = store
            .update_attendance(
                created.id,
                AttendanceUpdate {
                    out_time: Some("13:45".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.out_time.as_deref(), Some("13:45"));
        assert_eq!(updated.status, AttendanceStatus::HalfDay);

        store.delete_attendance(created.id).unwrap();
        assert_eq!(store.attendances().len(), 3);
        assert!(store.delete_attendance(created.id).unwrap_err().is_not_found());
    }
}
