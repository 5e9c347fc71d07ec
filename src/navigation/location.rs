//! Location fragment handling.
//!
//! The controller only ever sees the part of the address after `#`.
//! Hosts implement [`Location`] to expose it.

/// The host's addressable location.
pub trait Location {
    /// The raw hash, including the leading `#`, or empty.
    fn hash(&self) -> String;

    /// Point the location at `route`. A leading `#` is accepted and not doubled.
    fn set_hash(&mut self, route: &str);
}

/// Strip the `#` marker from a hash, defaulting to `/` when nothing remains.
pub fn route_from_hash(hash: &str) -> String {
    let route = hash.strip_prefix('#').unwrap_or(hash);
    if route.is_empty() {
        "/".to_string()
    } else {
        route.to_string()
    }
}

/// Extract the hash (with `#`) from a full URL. URLs without one yield "".
pub fn hash_of_url(url: &str) -> &str {
    url.find('#').map(|idx| &url[idx..]).unwrap_or("")
}

/// Location held in memory, for hosts without a real address bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    hash: String,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the hash of `url`.
    pub fn from_url(url: &str) -> Self {
        Self {
            hash: hash_of_url(url).to_string(),
        }
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.hash.clone()
    }

    fn set_hash(&mut self, route: &str) {
        let route = route.strip_prefix('#').unwrap_or(route);
        self.hash = if route.is_empty() {
            String::new()
        } else {
            format!("#{route}")
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_hash() {
        assert_eq!(route_from_hash(""), "/");
        assert_eq!(route_from_hash("#"), "/");
        assert_eq!(route_from_hash("#/invoices/7"), "/invoices/7");
        // Verbatim, no normalization
        assert_eq!(route_from_hash("#/invoices/"), "/invoices/");
        assert_eq!(route_from_hash("#invoices"), "invoices");
    }

    #[test]
    fn test_hash_of_url() {
        assert_eq!(hash_of_url("https://app.local/index.html#/clients"), "#/clients");
        assert_eq!(hash_of_url("https://app.local/"), "");
        assert_eq!(hash_of_url("https://app.local/#"), "#");
    }

    #[test]
    fn test_memory_location() {
        let mut location = MemoryLocation::from_url("file:///app/index.html#/reports");
        assert_eq!(location.hash(), "#/reports");

        location.set_hash("/login");
        assert_eq!(location.hash(), "#/login");

        location.set_hash("#/signup");
        assert_eq!(location.hash(), "#/signup");

        location.set_hash("");
        assert_eq!(route_from_hash(&location.hash()), "/");
    }
}
