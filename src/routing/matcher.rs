//! Route pattern matching logic.
//!
//! # Responsibilities
//! - Parse a pattern string into literal and `:param` segments
//! - Match a path segment-by-segment against a pattern
//! - Bind parameter segments to the raw path values
//!
//! # Design Decisions
//! - Paths are split on `/` verbatim (no decoding, no slash normalization)
//! - Segment counts must be equal; there are no wildcard segments
//! - A parameter segment matches any value, including the empty string
//! - No regex, matching is a single zip over the segments

use std::collections::BTreeMap;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly (case-sensitive).
    Literal(String),
    /// Matches anything and binds it under the given name.
    Param(String),
}

/// Parameters extracted from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: BTreeMap<String, String>,
}

impl RouteParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // Later bindings of the same name overwrite earlier ones.
    fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A compiled route pattern such as `/invoices/:id`.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a pattern string.
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let segments = raw
            .split('/')
            .map(|part| match part.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(part.to_string()),
            })
            .collect();
        Self { raw, segments }
    }

    /// The pattern as written in the route table.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if the pattern string is literally equal to `path`.
    pub fn is_exact(&self, path: &str) -> bool {
        self.raw == path
    }

    /// Match `path` structurally, returning the bound parameters on success.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Param(name) => params.insert(name, part),
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
            }
        }
        Some(params)
    }
}
