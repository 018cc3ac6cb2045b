//! Request headers sent with every GET.

use std::collections::BTreeMap;

/// User agent used when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

const USER_AGENT: &str = "User-Agent";

/// Immutable header set. Always carries a `User-Agent`.
///
/// There is no way to modify a `RequestHeaders` once built; a transport owns
/// one for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    map: BTreeMap<String, String>,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }
}

impl RequestHeaders {
    /// Only a `User-Agent` header with the given value.
    pub fn with_user_agent(user_agent: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(USER_AGENT.to_string(), user_agent.to_string());
        Self { map }
    }

    /// Uses `headers` as given. If no `User-Agent` is present (any case),
    /// the default one is added.
    pub fn from_map(headers: BTreeMap<String, String>) -> Self {
        let mut map: BTreeMap<String, String> = headers
            .into_iter()
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        if !map.keys().any(|k| k.eq_ignore_ascii_case(USER_AGENT)) {
            map.insert(USER_AGENT.to_string(), DEFAULT_USER_AGENT.to_string());
        }
        Self { map }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn user_agent(&self) -> &str {
        self.get(USER_AGENT).unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Header lines in `Name: value` form, as handed to curl.
    pub fn to_lines(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect()
    }
}

/// Parses a `Name: value` header argument.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
