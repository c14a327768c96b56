//! Leave applications
//!
//! New applications always start `Pending` with `appliedOn` set to now.
//! Approve and reject overwrite the status from any state.

use super::{Store, StoreResult};
use shared::Notification;
use shared::models::{
    LeaveApplication, LeaveApplicationCreate, LeaveApplicationUpdate, LeaveStatus,
};

impl Store {
    pub fn leave_applications(&self) -> &[LeaveApplication] {
        self.leave_applications.as_slice()
    }

    pub fn get_leave_application_by_id(&self, id: i64) -> Option<&LeaveApplication> {
        self.leave_applications.get(id)
    }

    pub fn add_leave_application(
        &mut self,
        data: LeaveApplicationCreate,
    ) -> StoreResult<LeaveApplication> {
        let record = self.append(data)?;
        self.notifier.notify(Notification::info(
            "Leave Application Submitted",
            "Your leave application has been submitted successfully.",
        ));
        self.commit::<LeaveApplication>();
        Ok(record)
    }

    pub fn update_leave_application(
        &mut self,
        id: i64,
        patch: LeaveApplicationUpdate,
    ) -> StoreResult<LeaveApplication> {
        self.update_record(id, patch)
    }

    pub fn delete_leave_application(&mut self, id: i64) -> StoreResult<LeaveApplication> {
        self.remove_record(id, None)
    }

    pub fn approve_leave_application(&mut self, id: i64) -> StoreResult<LeaveApplication> {
        self.set_leave_status(id, LeaveStatus::Approved)
    }

    pub fn reject_leave_application(&mut self, id: i64) -> StoreResult<LeaveApplication> {
        self.set_leave_status(id, LeaveStatus::Rejected)
    }

    fn set_leave_status(
        &mut self,
        id: i64,
        status: LeaveStatus,
    ) -> StoreResult<LeaveApplication> {
        let record = self.modify_record(id, |la: &mut LeaveApplication| la.status = status)?;
        tracing::info!(id, status = %status, "Leave application status changed");

        let verb = status.as_str().to_lowercase();
        self.notifier.notify(Notification::info(
            format!("Leave Application {status}"),
            format!("Leave application has been {verb}."),
        ));
        self.commit::<LeaveApplication>();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::RedbStorage;
    use crate::store::StoreOptions;
    use chrono::{NaiveDate, Utc};
    use shared::models::DayDuration;

    fn empty_store() -> Store {
        Store::open(
            RedbStorage::open_in_memory().unwrap(),
            StoreOptions {
                seed_sample_data: false,
                ..Default::default()
            },
        )
    }

    fn application() -> LeaveApplicationCreate {
        LeaveApplicationCreate {
            employee_id: 1,
            leave_type_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            day_duration: DayDuration::Full,
            remarks: Some("Wedding".into()),
        }
    }

    #[test]
    fn test_new_application_is_pending_now() {
        let mut store = empty_store();
        let mut rx = store.subscribe();

        let before = Utc::now();
        let created = store.add_leave_application(application()).unwrap();
        let after = Utc::now();

        assert_eq!(created.id, 1);
        assert_eq!(created.status, LeaveStatus::Pending);
        assert!(created.applied_on >= before && created.applied_on <= after);
        assert_eq!(created.day_count(), 3);

        let note = rx.try_recv().unwrap();
        assert_eq!(note.title, "Leave Application Submitted");
    }

    #[test]
    fn test_status_transitions_are_unguarded() {
        let mut store = empty_store();
        let id = store.add_leave_application(application()).unwrap().id;
        let mut rx = store.subscribe();

        let approved = store.approve_leave_application(id).unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);

        let rejected = store.reject_leave_application(id).unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.applied_on, approved.applied_on);
        assert_eq!(rejected.remarks.as_deref(), Some("Wedding"));

        let approve_note = rx.try_recv().unwrap();
        assert_eq!(approve_note.title, "Leave Application Approved");
        assert_eq!(approve_note.message, "Leave application has been approved.");
        let reject_note = rx.try_recv().unwrap();
        assert_eq!(reject_note.title, "Leave Application Rejected");
        assert_eq!(reject_note.message, "Leave application has been rejected.");
    }

    #[test]
    fn test_approve_missing_is_not_found() {
        let mut store = empty_store();
        let err = store.approve_leave_application(7).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.code(), shared::ErrorCode::LeaveApplicationNotFound);
    }
}
