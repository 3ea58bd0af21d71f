//! Query parameters accepted by `/ws-controller`.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of a controller request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TokenQuery {
    /// Shared-secret token. Absent and empty are treated the same.
    pub token: Option<String>,
}

impl TokenQuery {
    /// Builds the query from decoded key/value pairs. When `token` is
    /// repeated, the first occurrence wins; other keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let token = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "token").then_some(value));
        Self { token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_token_wins() {
        let query = TokenQuery::from_pairs(pairs(&[("token", "xyz"), ("token", "abcd")]));
        assert_eq!(query.token.as_deref(), Some("xyz"));
    }

    #[test]
    fn other_keys_are_ignored() {
        let query = TokenQuery::from_pairs(pairs(&[("foo", "1"), ("token", "abcd")]));
        assert_eq!(query.token.as_deref(), Some("abcd"));
    }

    #[test]
    fn absent_token_is_none() {
        assert!(TokenQuery::from_pairs(pairs(&[("foo", "1")])).token.is_none());
        assert!(TokenQuery::from_pairs(Vec::new()).token.is_none());
    }

    #[test]
    fn empty_token_is_kept_as_empty() {
        let query = TokenQuery::from_pairs(pairs(&[("token", ""), ("token", "abcd")]));
        assert_eq!(query.token.as_deref(), Some(""));
    }
}
