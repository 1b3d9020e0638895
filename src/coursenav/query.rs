//! Query strings and locations.
//!
//! [`QueryMap`] mirrors the browser's `URLSearchParams`: an ordered list of
//! key/value pairs where a key may repeat, `get` returns the first value and
//! `set` collapses duplicates. Encoding follows
//! `application/x-www-form-urlencoded` via the `url` crate.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;
use url::Url;

/// Base used to resolve relative hrefs. Only path and query survive parsing.
const RESOLVE_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query component, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Sets `key` to `value`, keeping the position of its first occurrence.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Removes every occurrence of `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    /// Moves the pairs whose key is in `keys` behind all other pairs, ordered
    /// as in `keys`. Other pairs keep their relative order.
    pub fn move_to_end(&mut self, keys: &[&str]) {
        let (mut owned, mut rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pairs)
            .into_iter()
            .partition(|(k, _)| keys.contains(&k.as_str()));
        owned.sort_by_key(|(k, _)| keys.iter().position(|key| *key == k.as_str()));
        rest.append(&mut owned);
        self.pairs = rest;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryMap {
    /// Serialized without the leading `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (k, v) in iter {
            let key: String = k.into();
            map.set(&key, v);
        }
        map
    }
}

/// A path plus its query. Fragments are dropped; the core never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Location {
    pub path: String,
    pub query: QueryMap,
}

impl Location {
    pub fn new(path: impl Into<String>, query: QueryMap) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Resolves `href` (absolute URL, absolute path, or `?query`) against the root.
    pub fn parse(href: &str) -> Result<Self> {
        let url = Url::parse(RESOLVE_BASE)?.join(href)?;
        Ok(Self {
            path: url.path().to_string(),
            query: QueryMap::parse(url.query().unwrap_or_default()),
        })
    }

    /// Resolves `href` against this location, so `?day=5` keeps the current path.
    pub fn resolve(&self, href: &str) -> Result<Self> {
        let base = Url::parse(RESOLVE_BASE)?.join(&self.href())?;
        let url = base.join(href)?;
        Ok(Self {
            path: url.path().to_string(),
            query: QueryMap::parse(url.query().unwrap_or_default()),
        })
    }

    pub fn with_query(&self, query: QueryMap) -> Self {
        Self {
            path: self.path.clone(),
            query,
        }
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/", QueryMap::new())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl FromStr for Location {
    type Err = crate::error::NavError;

    fn from_str(s: &str) -> Result<Self> {
        Location::parse(s)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.href()
    }
}

impl TryFrom<String> for Location {
    type Error = crate::error::NavError;

    fn try_from(href: String) -> Result<Self> {
        Location::parse(&href)
    }
}
