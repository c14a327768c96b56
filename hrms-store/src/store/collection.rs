//! Ordered record collection
//!
//! Insertion order is preserved and only the system-assigned id is unique.
//! Lookups are linear scans; collections hold tens to hundreds of records.

use shared::models::{ApplyUpdate, Entity, IntoRecord};
use shared::util::next_id;

#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Entity> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn next_id(&self) -> Option<i64> {
        next_id(self.records.iter().map(Entity::id))
    }

    /// Count records matching `pred`
    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.records.iter().filter(|r| pred(r)).count()
    }

    /// Build a record with the next id and append it; `None` if no id is left
    pub fn insert<C>(&mut self, data: C) -> Option<&T>
    where
        C: IntoRecord<Record = T>,
    {
        let record = data.into_record(self.next_id()?);
        self.records.push(record);
        self.records.last()
    }

    /// Merge `patch` into the record with `id`; `None` if absent
    pub fn update<U>(&mut self, id: i64, patch: U) -> Option<&T>
    where
        U: ApplyUpdate<Record = T>,
    {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        patch.apply_to(record);
        Some(&*record)
    }

    /// Apply `f` to the record with `id`; `None` if absent
    pub fn modify(&mut self, id: i64, f: impl FnOnce(&mut T)) -> Option<&T> {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        f(record);
        Some(&*record)
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Vec<T>> {
        serde_json::from_str(json)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}
