use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult, Record, RecordId};

/// Collection name shows are stored under.
pub const SHOWS_COLLECTION: &str = "shows";

/// A tracked TV show.
///
/// No invariants are enforced: `episodes_seen` may be any integer and `name`
/// may be any string. Presence checks happen at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: RecordId,
    pub name: String,
    pub episodes_seen: i64,
}

impl Show {
    /// A show that has not been stored yet (the store assigns its id).
    pub fn new(name: impl Into<String>, episodes_seen: i64) -> Self {
        Self {
            id: RecordId::default(),
            name: name.into(),
            episodes_seen,
        }
    }

    pub fn with_id(id: RecordId, name: impl Into<String>, episodes_seen: i64) -> Self {
        Self {
            id,
            name: name.into(),
            episodes_seen,
        }
    }
}

/// Partial overwrite of a show; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowPatch {
    pub name: Option<String>,
    pub episodes_seen: Option<i64>,
}

impl Record for Show {
    type Patch = ShowPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ShowPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(episodes_seen) = patch.episodes_seen {
            self.episodes_seen = episodes_seen;
        }
    }
}

/// Parse an episode count supplied as text.
pub fn parse_episodes(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("episode count `{raw}` is not an integer")))
}

/// Shows whose episode count is strictly greater than `threshold`, in input order.
pub fn more_episodes_than(shows: Vec<Show>, threshold: i64) -> Vec<Show> {
    shows
        .into_iter()
        .filter(|s| s.episodes_seen > threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Show> {
        vec![
            Show::with_id(RecordId::new(1), "Game of Thrones", 0),
            Show::with_id(RecordId::new(2), "Naruto", 220),
            Show::with_id(RecordId::new(3), "Black Mirror", 5),
            Show::with_id(RecordId::new(4), "Dark", 6),
        ]
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut show = Show::with_id(RecordId::new(2), "Naruto", 220);

        show.apply(&ShowPatch {
            name: Some("Naruto Shippuden".to_string()),
            episodes_seen: None,
        });
        assert_eq!(show.name, "Naruto Shippuden");
        assert_eq!(show.episodes_seen, 220);

        show.apply(&ShowPatch {
            name: None,
            episodes_seen: Some(500),
        });
        assert_eq!(show.name, "Naruto Shippuden");
        assert_eq!(show.episodes_seen, 500);
        assert_eq!(show.id, RecordId::new(2));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut show = Show::with_id(RecordId::new(1), "Dark", 6);
        let before = show.clone();
        show.apply(&ShowPatch::default());
        assert_eq!(show, before);
    }

    #[test]
    fn threshold_is_strict() {
        let names: Vec<_> = more_episodes_than(sample(), 5)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Naruto", "Dark"]);
    }

    #[test]
    fn parse_episodes_accepts_integers_only() {
        assert_eq!(parse_episodes("3").unwrap(), 3);
        assert_eq!(parse_episodes(" -2 ").unwrap(), -2);
        assert!(matches!(
            parse_episodes("three"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn show_serializes_with_named_fields() {
        let json = serde_json::to_value(Show::with_id(RecordId::new(9), "A", 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 9, "name": "A", "episodes_seen": 3})
        );
    }

    proptest! {
        #[test]
        fn filter_keeps_exactly_the_shows_above_threshold(
            counts in proptest::collection::vec(-50i64..500, 0..40),
            threshold in -60i64..510,
        ) {
            let shows: Vec<Show> = counts
                .iter()
                .enumerate()
                .map(|(i, c)| Show::with_id(RecordId::new(i as i64 + 1), format!("show-{i}"), *c))
                .collect();

            let kept = more_episodes_than(shows.clone(), threshold);

            prop_assert!(kept.iter().all(|s| s.episodes_seen > threshold));
            let expected = shows.iter().filter(|s| s.episodes_seen > threshold).count();
            prop_assert_eq!(kept.len(), expected);
        }
    }
}
