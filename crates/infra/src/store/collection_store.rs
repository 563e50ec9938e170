use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shows_core::{Record, RecordId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Key/value store over named collections of records.
///
/// Each call is individually consistent. Nothing spans calls: a
/// `get_by_id` followed by `update_by_id` can interleave with other writers.
pub trait CollectionStore<R: Record>: Send + Sync {
    fn get_all(&self, collection: &str) -> Result<Vec<R>, StoreError>;

    fn get_by_id(&self, collection: &str, id: RecordId) -> Result<Option<R>, StoreError>;

    /// Insert a record, assigning it the next id. Returns the stored record.
    fn create(&self, collection: &str, record: R) -> Result<R, StoreError>;

    /// Apply `patch` to the record with `id`. `None` when no such record exists.
    fn update_by_id(
        &self,
        collection: &str,
        id: RecordId,
        patch: &R::Patch,
    ) -> Result<Option<R>, StoreError>;

    /// Remove the record with `id`. Returns whether anything was removed.
    fn delete_by_id(&self, collection: &str, id: RecordId) -> Result<bool, StoreError>;
}

impl<R, S> CollectionStore<R> for Arc<S>
where
    R: Record,
    S: CollectionStore<R> + ?Sized,
{
    fn get_all(&self, collection: &str) -> Result<Vec<R>, StoreError> {
        (**self).get_all(collection)
    }

    fn get_by_id(&self, collection: &str, id: RecordId) -> Result<Option<R>, StoreError> {
        (**self).get_by_id(collection, id)
    }

    fn create(&self, collection: &str, record: R) -> Result<R, StoreError> {
        (**self).create(collection, record)
    }

    fn update_by_id(
        &self,
        collection: &str,
        id: RecordId,
        patch: &R::Patch,
    ) -> Result<Option<R>, StoreError> {
        (**self).update_by_id(collection, id, patch)
    }

    fn delete_by_id(&self, collection: &str, id: RecordId) -> Result<bool, StoreError> {
        (**self).delete_by_id(collection, id)
    }
}

/// In-memory collection store for the dev server and tests.
///
/// Records keep insertion order. Collections must be registered up front;
/// touching an unregistered one is a `StoreError::UnknownCollection`.
#[derive(Debug)]
pub struct InMemoryCollectionStore<R> {
    inner: RwLock<HashMap<String, Vec<R>>>,
}

impl<R> InMemoryCollectionStore<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Register `collection` with initial records (ids are kept as given).
    pub fn with_collection(self, collection: impl Into<String>, records: Vec<R>) -> Self {
        if let Ok(mut map) = self.inner.write() {
            map.insert(collection.into(), records);
        }
        self
    }
}

impl<R> Default for InMemoryCollectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown(collection: &str) -> StoreError {
    StoreError::UnknownCollection(collection.to_string())
}

impl<R: Record> CollectionStore<R> for InMemoryCollectionStore<R> {
    fn get_all(&self, collection: &str) -> Result<Vec<R>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        map.get(collection).cloned().ok_or_else(|| unknown(collection))
    }

    fn get_by_id(&self, collection: &str, id: RecordId) -> Result<Option<R>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let records = map.get(collection).ok_or_else(|| unknown(collection))?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn create(&self, collection: &str, mut record: R) -> Result<R, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let records = map.get_mut(collection).ok_or_else(|| unknown(collection))?;

        // Next id is one past the current maximum; an empty collection starts at 1.
        let id = records
            .iter()
            .map(|r| r.id())
            .max()
            .map(|max| max.next())
            .unwrap_or(RecordId::new(1));
        record.assign_id(id);
        records.push(record.clone());

        tracing::debug!(collection, %id, "record created");
        Ok(record)
    }

    fn update_by_id(
        &self,
        collection: &str,
        id: RecordId,
        patch: &R::Patch,
    ) -> Result<Option<R>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let records = map.get_mut(collection).ok_or_else(|| unknown(collection))?;

        Ok(records.iter_mut().find(|r| r.id() == id).map(|r| {
            r.apply(patch);
            r.clone()
        }))
    }

    fn delete_by_id(&self, collection: &str, id: RecordId) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let records = map.get_mut(collection).ok_or_else(|| unknown(collection))?;

        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shows_core::{Show, ShowPatch, SHOWS_COLLECTION};

    fn store() -> InMemoryCollectionStore<Show> {
        InMemoryCollectionStore::new().with_collection(
            SHOWS_COLLECTION,
            vec![
                Show::with_id(RecordId::new(1), "Game of Thrones", 0),
                Show::with_id(RecordId::new(4), "Naruto", 220),
            ],
        )
    }

    #[test]
    fn create_assigns_next_id_after_max() {
        let store = store();
        let created = store.create(SHOWS_COLLECTION, Show::new("A", 3)).unwrap();
        assert_eq!(created.id, RecordId::new(5));

        let fetched = store.get_by_id(SHOWS_COLLECTION, created.id).unwrap().unwrap();
        assert_eq!(fetched.name, "A");
        assert_eq!(fetched.episodes_seen, 3);
    }

    #[test]
    fn create_in_empty_collection_starts_at_one() {
        let store: InMemoryCollectionStore<Show> =
            InMemoryCollectionStore::new().with_collection(SHOWS_COLLECTION, vec![]);
        let created = store.create(SHOWS_COLLECTION, Show::new("First", 0)).unwrap();
        assert_eq!(created.id, RecordId::new(1));
    }

    #[test]
    fn get_all_keeps_insertion_order() {
        let store = store();
        store.create(SHOWS_COLLECTION, Show::new("Dark", 6)).unwrap();

        let names: Vec<_> = store
            .get_all(SHOWS_COLLECTION)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Game of Thrones", "Naruto", "Dark"]);
    }

    #[test]
    fn update_applies_patch_to_addressed_record_only() {
        let store = store();
        let patch = ShowPatch {
            name: None,
            episodes_seen: Some(12),
        };

        let updated = store
            .update_by_id(SHOWS_COLLECTION, RecordId::new(1), &patch)
            .unwrap()
            .unwrap();
        assert_eq!(updated.episodes_seen, 12);
        assert_eq!(updated.name, "Game of Thrones");

        let untouched = store.get_by_id(SHOWS_COLLECTION, RecordId::new(4)).unwrap().unwrap();
        assert_eq!(untouched.episodes_seen, 220);
    }

    #[test]
    fn update_missing_record_is_none() {
        let store = store();
        let res = store
            .update_by_id(SHOWS_COLLECTION, RecordId::new(99), &ShowPatch::default())
            .unwrap();
        assert!(res.is_none());
    }

    #[test]
    fn delete_removes_record_once() {
        let store = store();
        assert!(store.delete_by_id(SHOWS_COLLECTION, RecordId::new(4)).unwrap());
        assert!(store.get_by_id(SHOWS_COLLECTION, RecordId::new(4)).unwrap().is_none());
        assert!(!store.delete_by_id(SHOWS_COLLECTION, RecordId::new(4)).unwrap());
    }

    #[test]
    fn unknown_collection_is_an_error() {
        let store = store();
        assert_eq!(
            store.get_all("movies").unwrap_err(),
            StoreError::UnknownCollection("movies".to_string())
        );
        assert!(matches!(
            store.create("movies", Show::new("A", 1)),
            Err(StoreError::UnknownCollection(_))
        ));
    }

    #[test]
    fn works_through_a_shared_trait_object() {
        let store: Arc<dyn CollectionStore<Show>> = Arc::new(store());
        let created = store.create(SHOWS_COLLECTION, Show::new("Shared", 1)).unwrap();
        assert!(store.get_by_id(SHOWS_COLLECTION, created.id).unwrap().is_some());
    }
}
