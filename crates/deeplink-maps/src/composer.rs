use std::fmt;

use deeplink_core::{AppConfig, DEFAULT_MAPS_BASE_URL};

use crate::error::MapsError;
use crate::rules::RULES;
use crate::types::LocationQueryConfig;

/// Ordered `(key, value)` query parameters. Values are stored exactly as they
/// appear on the wire, i.e. already percent-encoded where the rule encodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairList {
    pairs: Vec<(String, String)>,
}

impl QueryPairList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value for `key`, still encoded.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// `k1=v1&k2=v2...` in list order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Split a query string back into pairs, keeping values encoded.
    ///
    /// A leading `?` is ignored, as are empty segments. A segment without `=`
    /// becomes a pair with an empty value.
    #[must_use]
    pub fn parse_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (segment.to_string(), String::new()),
            })
            .collect()
    }
}

impl FromIterator<(String, String)> for QueryPairList {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Run `config` through the parameter table and collect every pair that fires.
#[must_use]
pub fn compose_pairs(config: &LocationQueryConfig) -> QueryPairList {
    RULES
        .iter()
        .filter_map(|rule| (rule.emit)(config).map(|value| (rule.key.to_string(), value)))
        .collect()
}

/// A finished maps deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink {
    url: String,
    pairs: QueryPairList,
}

impl MapLink {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The query component, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        self.url.split_once('?').map_or("", |(_, q)| q)
    }

    #[must_use]
    pub fn query_pairs(&self) -> &QueryPairList {
        &self.pairs
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for MapLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for MapLink {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Builds maps deep links rooted at a fixed base authority.
#[derive(Debug, Clone)]
pub struct LocationQueryComposer {
    base_url: String,
}

impl Default for LocationQueryComposer {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_MAPS_BASE_URL)
    }
}

impl LocationQueryComposer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root links at `base_url` instead of the canonical maps host.
    /// Trailing slashes are dropped.
    #[must_use]
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::with_base_url(&config.maps_base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compose a deep link for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::EmptyComposition`] when no rule produced a
    /// parameter; callers should treat that as "nothing to display".
    pub fn compose(&self, config: &LocationQueryConfig) -> Result<MapLink, MapsError> {
        let pairs = compose_pairs(config);
        if pairs.is_empty() {
            tracing::debug!("map link request produced no parameters");
            return Err(MapsError::EmptyComposition);
        }

        let url = format!("{}/?{}", self.base_url, pairs.to_query_string());
        tracing::debug!(pairs = pairs.len(), url = %url, "composed map link");

        Ok(MapLink { url, pairs })
    }
}

#[cfg(test)]
#[path = "composer_test.rs"]
mod tests;
