//! Query string parsing.
//!
//! The query component is the text after the first `?` of the request path.
//! Pairs are separated by `&` and split on the first `=`. Values are kept
//! raw: no percent-decoding happens here, see [`Request::query_as`] for typed
//! extraction.
//!
//! [`Request::query_as`]: crate::protocol::Request::query_as

use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Key/value pairs parsed from a query string.
///
/// A key without `=` maps to `None`. Later duplicates overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    data: HashMap<String, Option<String>>,
}

impl Query {
    /// Parses the query component of a raw request path.
    ///
    /// Returns an empty query when the path has no `?`.
    pub fn from_path(path: &str) -> Self {
        path.split_once('?').map(|(_, query)| Self::from(query)).unwrap_or_default()
    }

    /// Returns `Some(Some(value))` for `key=value`, `Some(None)` for a bare `key`.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.data.get(key).map(Option::as_deref)
    }

    /// Returns the value of `key` only when one was given.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Option<String>> {
        self.data.iter()
    }
}

impl From<&str> for Query {
    // a=1&c=2&b=3
    // ""
    // a=1&a=2
    // a&b&c=2
    fn from(str: &str) -> Self {
        let mut data = HashMap::new();

        for kv in str.split('&').filter(|kv| !kv.is_empty()) {
            let (key, value) = match kv.split_once('=') {
                Some((k, v)) => (k, Some(v.to_owned())),
                None => (kv, None),
            };
            data.insert(key.to_owned(), value);
        }

        Query { data }
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
