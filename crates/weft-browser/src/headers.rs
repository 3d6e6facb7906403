//! Ordered header set.
//!
//! One type serves both directions: request headers are serialized in
//! insertion order; response headers (stored with names already folded
//! to lowercase) are looked up case-insensitively.

/// Name/value pairs preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from a slice of pairs, applying [`Headers::set`] semantics.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.set(name, value);
        }
        headers
    }

    /// Insert or replace a header.
    ///
    /// Replacement requires an exact (case-sensitive) name match;
    /// anything else appends. This is the overlay primitive: writing
    /// defaults first and caller entries second gives "caller wins on
    /// collision" without ever dropping an un-collided default.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Case-insensitive lookup, first match wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
