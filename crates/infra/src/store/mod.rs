//! Named-collection record storage.
//!
//! The HTTP layer only sees the `CollectionStore` trait; the in-memory
//! implementation is what the binary and the tests wire in.

pub mod collection_store;
pub mod seed;

pub use collection_store::{CollectionStore, InMemoryCollectionStore, StoreError};
pub use seed::{sample_shows, seeded_show_store};
