//! `shows-core` — record types shared by the store and the HTTP layer.
//!
//! This crate holds **pure domain** types (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod record;
pub mod show;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use record::Record;
pub use show::{more_episodes_than, parse_episodes, Show, ShowPatch, SHOWS_COLLECTION};
