//! HRMS master-data store
//!
//! One explicit [`Store`] owns all eleven entity collections, the
//! persistence mirror and the outcome notifier. It is constructed once and
//! handed to consumers by reference; every mutation runs synchronously:
//!
//! ```text
//! mutate collection ──▶ notify outcome ──▶ commit (save whole collection)
//! ```
//!
//! A failed commit is logged and announced but never rolls back the
//! in-memory change.

mod attendance;
mod collection;
mod employees;
mod error;
mod integrity;
mod leave;
mod masters;
mod seed;

pub use collection::Collection;
pub use error::{Dependents, StoreError, StoreResult};

use crate::core::Config;
use crate::notifier::Notifier;
use crate::persistence::{PersistError, Persistence, RedbStorage};
use integrity::Blocked;
use shared::Notification;
use shared::models::{
    ApplyUpdate, Attendance, Category, Company, Department, Designation, Employee, Entity,
    Holiday, IntoRecord, LeaveApplication, LeaveType, ManualEntry, Shift,
};
use tokio::sync::broadcast;

/// Options applied when opening a [`Store`]
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Seed the sample records before persisted collections are loaded
    pub seed_sample_data: bool,
    pub notification_capacity: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            notification_capacity: 64,
        }
    }
}

impl From<&Config> for StoreOptions {
    fn from(config: &Config) -> Self {
        Self {
            seed_sample_data: config.seed_sample_data,
            notification_capacity: config.notification_capacity,
        }
    }
}

/// The master-data store
pub struct Store {
    persistence: Box<dyn Persistence>,
    notifier: Notifier,
    companies: Collection<Company>,
    departments: Collection<Department>,
    categories: Collection<Category>,
    designations: Collection<Designation>,
    shifts: Collection<Shift>,
    holidays: Collection<Holiday>,
    leave_types: Collection<LeaveType>,
    employees: Collection<Employee>,
    leave_applications: Collection<LeaveApplication>,
    manual_entries: Collection<ManualEntry>,
    attendances: Collection<Attendance>,
}

/// Typed access to the collection holding `T`
trait Holds<T: Entity> {
    fn collection(&self) -> &Collection<T>;
    fn collection_mut(&mut self) -> &mut Collection<T>;
}

macro_rules! impl_holds {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Holds<$ty> for Store {
                fn collection(&self) -> &Collection<$ty> {
                    &self.$field
                }

                fn collection_mut(&mut self) -> &mut Collection<$ty> {
                    &mut self.$field
                }
            }
        )+
    };
}

impl_holds! {
    Company => companies,
    Department => departments,
    Category => categories,
    Designation => designations,
    Shift => shifts,
    Holiday => holidays,
    LeaveType => leave_types,
    Employee => employees,
    LeaveApplication => leave_applications,
    ManualEntry => manual_entries,
    Attendance => attendances,
}

impl Store {
    /// Open a store over `persistence`
    ///
    /// Sample data is seeded first (when enabled), then every persisted
    /// collection present in `persistence` replaces its seed. Read or parse
    /// failures are logged and leave the seed for that collection in place.
    /// Nothing is written until the first mutation.
    pub fn open(persistence: impl Persistence + 'static, options: StoreOptions) -> Self {
        let mut store = Self {
            persistence: Box::new(persistence),
            notifier: Notifier::new(options.notification_capacity),
            companies: Collection::default(),
            departments: Collection::default(),
            categories: Collection::default(),
            designations: Collection::default(),
            shifts: Collection::default(),
            holidays: Collection::default(),
            leave_types: Collection::default(),
            employees: Collection::default(),
            leave_applications: Collection::default(),
            manual_entries: Collection::default(),
            attendances: Collection::default(),
        };

        if options.seed_sample_data {
            store.seed_sample_data();
        }

        store.load::<Company>();
        store.load::<Department>();
        store.load::<Category>();
        store.load::<Designation>();
        store.load::<Shift>();
        store.load::<Holiday>();
        store.load::<LeaveType>();
        store.load::<Employee>();
        store.load::<LeaveApplication>();
        store.load::<ManualEntry>();
        store.load::<Attendance>();

        let total: usize = store.collection_counts().iter().map(|(_, n)| n).sum();
        tracing::info!(records = total, "HRMS store opened");
        store
    }

    /// Open the file-backed store described by `config`
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(PersistError::from)?;
        let storage = RedbStorage::open(config.db_path())?;
        tracing::debug!(path = %config.db_path().display(), "Database opened");
        Ok(Self::open(storage, StoreOptions::from(config)))
    }

    /// Receive outcome notifications for writes made after this call
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    /// Record count per collection key, in persistence order
    pub fn collection_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            (Company::COLLECTION, self.companies.len()),
            (Department::COLLECTION, self.departments.len()),
            (Category::COLLECTION, self.categories.len()),
            (Designation::COLLECTION, self.designations.len()),
            (Shift::COLLECTION, self.shifts.len()),
            (Holiday::COLLECTION, self.holidays.len()),
            (LeaveType::COLLECTION, self.leave_types.len()),
            (Employee::COLLECTION, self.employees.len()),
            (LeaveApplication::COLLECTION, self.leave_applications.len()),
            (ManualEntry::COLLECTION, self.manual_entries.len()),
            (Attendance::COLLECTION, self.attendances.len()),
        ]
    }

    // ========== Generic plumbing ==========

    fn records<T: Entity>(&self) -> &Collection<T>
    where
        Self: Holds<T>,
    {
        <Self as Holds<T>>::collection(self)
    }

    fn records_mut<T: Entity>(&mut self) -> &mut Collection<T>
    where
        Self: Holds<T>,
    {
        <Self as Holds<T>>::collection_mut(self)
    }

    fn load<T: Entity>(&mut self)
    where
        Self: Holds<T>,
    {
        let json = match self.persistence.load(T::COLLECTION) {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(e) => {
                tracing::error!(
                    collection = T::COLLECTION,
                    error = %e,
                    "Failed to read persisted collection, keeping current data"
                );
                return;
            }
        };

        match Collection::<T>::from_json(&json) {
            Ok(records) => {
                tracing::debug!(
                    collection = T::COLLECTION,
                    records = records.len(),
                    "Loaded persisted collection"
                );
                self.records_mut::<T>().replace(records);
            }
            Err(e) => {
                tracing::error!(
                    collection = T::COLLECTION,
                    error = %e,
                    "Failed to parse persisted collection, keeping current data"
                );
            }
        }
    }

    /// Save the whole collection holding `T`
    fn commit<T: Entity>(&self)
    where
        Self: Holds<T>,
    {
        let saved = self
            .records::<T>()
            .to_json()
            .map_err(PersistError::from)
            .and_then(|json| self.persistence.save(T::COLLECTION, &json));

        if let Err(e) = saved {
            tracing::error!(collection = T::COLLECTION, error = %e, "Failed to persist collection");
            self.notifier.notify(Notification::destructive(
                "Save Failed",
                format!("{} changes could not be saved: {e}", T::LABEL),
            ));
        }
    }

    /// Append a record with the next id; no success notification, no commit
    fn append<C>(&mut self, data: C) -> StoreResult<C::Record>
    where
        C: IntoRecord,
        Self: Holds<C::Record>,
    {
        let label = <C::Record as Entity>::LABEL;
        let Some(record) = self.records_mut::<C::Record>().insert(data).cloned() else {
            tracing::error!(entity = label, "Record id space exhausted");
            self.notifier.notify(Notification::destructive(
                format!("Cannot Add {label}"),
                format!("No id is left for a new {}.", label.to_lowercase()),
            ));
            return Err(StoreError::IdsExhausted { entity: label });
        };
        tracing::info!(entity = label, id = record.id(), "Record added");
        Ok(record)
    }

    fn add_record<C>(&mut self, data: C) -> StoreResult<C::Record>
    where
        C: IntoRecord,
        Self: Holds<C::Record>,
    {
        let label = <C::Record as Entity>::LABEL;
        let record = self.append(data)?;
        self.notifier.notify(Notification::info(
            format!("{label} Added"),
            format!("{} has been successfully added.", subject(&record)),
        ));
        self.commit::<C::Record>();
        Ok(record)
    }

    fn update_record<U>(&mut self, id: i64, patch: U) -> StoreResult<U::Record>
    where
        U: ApplyUpdate,
        Self: Holds<U::Record>,
    {
        let label = <U::Record as Entity>::LABEL;
        let Some(record) = self.records_mut::<U::Record>().update(id, patch).cloned() else {
            return Err(self.missing::<U::Record>(id));
        };
        tracing::info!(entity = label, id, "Record updated");

        self.notifier.notify(Notification::info(
            format!("{label} Updated"),
            format!("{} has been successfully updated.", sentence_case(label)),
        ));
        self.commit::<U::Record>();
        Ok(record)
    }

    /// Apply `f` to an existing record; no notification, no commit
    fn modify_record<T: Entity>(&mut self, id: i64, f: impl FnOnce(&mut T)) -> StoreResult<T>
    where
        Self: Holds<T>,
    {
        let Some(record) = self.records_mut::<T>().modify(id, f).cloned() else {
            return Err(self.missing::<T>(id));
        };
        tracing::info!(entity = T::LABEL, id, "Record updated");
        Ok(record)
    }

    /// Remove a record unless `blocked` reports dependents
    fn remove_record<T: Entity>(&mut self, id: i64, blocked: Option<Blocked>) -> StoreResult<T>
    where
        Self: Holds<T>,
    {
        if !self.records::<T>().contains(id) {
            return Err(self.missing::<T>(id));
        }
        if let Some(blocked) = blocked {
            return Err(self.refuse::<T>(id, blocked));
        }
        let Some(record) = self.records_mut::<T>().remove(id) else {
            return Err(self.missing::<T>(id));
        };
        tracing::info!(entity = T::LABEL, id, "Record deleted");

        self.notifier.notify(Notification::info(
            format!("{} Deleted", T::LABEL),
            format!("{} has been successfully deleted.", subject(&record)),
        ));
        self.commit::<T>();
        Ok(record)
    }

    fn missing<T: Entity>(&self, id: i64) -> StoreError {
        tracing::warn!(entity = T::LABEL, id, "Record not found");
        self.notifier.notify(Notification::destructive(
            format!("{} Not Found", T::LABEL),
            format!("{} with id {id} does not exist.", sentence_case(T::LABEL)),
        ));
        StoreError::NotFound {
            entity: T::LABEL,
            id,
            code: T::NOT_FOUND,
        }
    }

    fn refuse<T: Entity>(&self, id: i64, blocked: Blocked) -> StoreError {
        tracing::warn!(
            entity = T::LABEL,
            id,
            dependents = ?blocked.dependents,
            "Delete blocked by dependent records"
        );
        self.notifier.notify(Notification::destructive(
            format!("Cannot Delete {}", T::LABEL),
            blocked.message,
        ));
        StoreError::InUse {
            entity: T::LABEL,
            id,
            code: blocked.code,
            message: blocked.message.to_string(),
            dependents: blocked.dependents,
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("collections", &self.collection_counts())
            .finish_non_exhaustive()
    }
}

/// Record name for messages, falling back to the entity label
fn subject<T: Entity>(record: &T) -> String {
    record
        .display_name()
        .map(str::to_owned)
        .unwrap_or_else(|| sentence_case(T::LABEL))
}

/// "Leave Application" -> "Leave application"
fn sentence_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistResult;
    use shared::models::{CategoryCreate, CategoryUpdate};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory map that can be told to fail writes
    #[derive(Clone, Default)]
    struct MemoryPersistence {
        values: Arc<Mutex<HashMap<String, String>>>,
        fail_writes: bool,
    }

    impl Persistence for MemoryPersistence {
        fn load(&self, key: &str) -> PersistResult<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn save(&self, key: &str, json: &str) -> PersistResult<()> {
            if self.fail_writes {
                return Err(PersistError::Io(std::io::Error::other("quota exceeded")));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), json.to_string());
            Ok(())
        }
    }

    fn empty_store(persistence: MemoryPersistence) -> Store {
        Store::open(
            persistence,
            StoreOptions {
                seed_sample_data: false,
                notification_capacity: 16,
            },
        )
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("Leave Application"), "Leave application");
        assert_eq!(sentence_case("Company"), "Company");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn test_open_without_seed_is_empty_and_writes_nothing() {
        let persistence = MemoryPersistence::default();
        let store = empty_store(persistence.clone());

        assert!(store.collection_counts().iter().all(|(_, n)| *n == 0));
        assert!(persistence.values.lock().unwrap().is_empty());
    }

    #[test]
    fn test_add_commits_whole_collection() {
        let persistence = MemoryPersistence::default();
        let mut store = empty_store(persistence.clone());
        let mut rx = store.subscribe();

        store
            .add_category(CategoryCreate {
                code: "PERM".into(),
                name: "Permanent".into(),
                description: None,
            })
            .unwrap();

        let saved = persistence.values.lock().unwrap()["hrms_categories"].clone();
        assert_eq!(saved, r#"[{"id":1,"code":"PERM","name":"Permanent"}]"#);

        let note = rx.try_recv().unwrap();
        assert_eq!(note.title, "Category Added");
        assert_eq!(note.message, "Permanent has been successfully added.");
    }

    #[test]
    fn test_failed_commit_keeps_mutation_and_reports() {
        let persistence = MemoryPersistence {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = empty_store(persistence);
        let mut rx = store.subscribe();

        let created = store
            .add_category(CategoryCreate {
                code: "CONT".into(),
                name: "Contract".into(),
                description: None,
            })
            .unwrap();
        assert_eq!(store.get_category_by_id(created.id), Some(&created));

        assert!(!rx.try_recv().unwrap().is_destructive());
        let failure = rx.try_recv().unwrap();
        assert!(failure.is_destructive());
        assert_eq!(failure.title, "Save Failed");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let persistence = MemoryPersistence::default();
        let mut store = empty_store(persistence.clone());
        let mut rx = store.subscribe();

        let err = store
            .update_category(99, CategoryUpdate::default())
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.code(), shared::ErrorCode::CategoryNotFound);

        let note = rx.try_recv().unwrap();
        assert!(note.is_destructive());
        assert_eq!(note.title, "Category Not Found");
        assert!(persistence.values.lock().unwrap().is_empty());
    }

    #[test]
    fn test_add_refused_when_ids_exhausted() {
        let stored = format!(r#"[{{"id":{},"code":"LAST","name":"Last"}}]"#, i64::MAX);
        let persistence = MemoryPersistence::default();
        persistence
            .values
            .lock()
            .unwrap()
            .insert("hrms_categories".into(), stored.clone());
        let mut store = empty_store(persistence.clone());
        let mut rx = store.subscribe();

        let err = store
            .add_category(CategoryCreate {
                code: "NEXT".into(),
                name: "Next".into(),
                description: None,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted { entity: "Category" }));
        assert_eq!(err.code(), shared::ErrorCode::InternalError);
        assert_eq!(store.categories().len(), 1);

        let note = rx.try_recv().unwrap();
        assert!(note.is_destructive());
        assert_eq!(note.title, "Cannot Add Category");
        assert!(rx.try_recv().is_err());
        assert_eq!(persistence.values.lock().unwrap()["hrms_categories"], stored);
    }
}
