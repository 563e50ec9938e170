//! Infrastructure layer: record storage behind the HTTP API.

pub mod store;

pub use store::{CollectionStore, InMemoryCollectionStore, StoreError};
