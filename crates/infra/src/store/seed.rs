use std::sync::Arc;

use shows_core::{RecordId, Show, SHOWS_COLLECTION};

use super::{CollectionStore, InMemoryCollectionStore};

/// Initial records for the `shows` collection.
pub fn sample_shows() -> Vec<Show> {
    vec![
        Show::with_id(RecordId::new(1), "Game of Thrones", 0),
        Show::with_id(RecordId::new(2), "Naruto", 220),
        Show::with_id(RecordId::new(3), "Black Mirror", 3),
        Show::with_id(RecordId::new(4), "Brooklyn Nine-Nine", 22),
    ]
}

/// An in-memory store with the `shows` collection registered.
///
/// With `seed` false the collection starts empty.
pub fn seeded_show_store(seed: bool) -> Arc<dyn CollectionStore<Show>> {
    let records = if seed { sample_shows() } else { Vec::new() };
    tracing::info!(records = records.len(), "initializing in-memory show store");
    Arc::new(InMemoryCollectionStore::new().with_collection(SHOWS_COLLECTION, records))
}
