use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use shows_core::{parse_episodes, DomainResult, ShowPatch};

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Query-string arguments for create and update.
///
/// `param1` is the show name, `param2` the episode count. Absent and empty
/// values are treated the same way. When a key repeats, the first value wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShowParams {
    pub param1: Option<String>,
    pub param2: Option<String>,
}

impl ShowParams {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "param1" => &mut params.param1,
                "param2" => &mut params.param2,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(self.param1.as_deref())
    }

    pub fn episodes(&self) -> Option<&str> {
        non_empty(self.param2.as_deref())
    }

    /// Patch carrying every provided, non-empty parameter.
    pub fn to_patch(&self) -> DomainResult<ShowPatch> {
        Ok(ShowPatch {
            name: self.name().map(str::to_string),
            episodes_seen: self.episodes().map(parse_episodes).transpose()?,
        })
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ShowParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidParameter(e.body_text()))?;
        Ok(Self::from_pairs(pairs))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(p1: Option<&str>, p2: Option<&str>) -> ShowParams {
        ShowParams {
            param1: p1.map(str::to_string),
            param2: p2.map(str::to_string),
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_and_absent_are_both_missing() {
        let p = params(Some(""), None);
        assert_eq!(p.name(), None);
        assert_eq!(p.episodes(), None);
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let p = ShowParams::from_pairs(pairs(&[
            ("param1", "A"),
            ("param1", "B"),
            ("other", "x"),
            ("param2", "3"),
            ("param2", "9"),
        ]));
        assert_eq!(p, params(Some("A"), Some("3")));
    }

    #[test]
    fn repeated_empty_first_value_still_counts_as_missing() {
        let p = ShowParams::from_pairs(pairs(&[("param1", ""), ("param1", "B")]));
        assert_eq!(p.name(), None);
    }

    #[test]
    fn patch_includes_only_provided_fields() {
        let patch = params(Some("Dark"), Some("")).to_patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Dark"));
        assert_eq!(patch.episodes_seen, None);

        let patch = params(None, Some("12")).to_patch().unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.episodes_seen, Some(12));
    }

    #[test]
    fn patch_rejects_non_integer_episodes() {
        assert!(params(None, Some("many")).to_patch().is_err());
    }
}
