//! Where the shareable query string lives

/// Holder of the current query string
///
/// `replace` overwrites the current entry; filter changes never create new
/// navigable history.
pub trait Location {
    /// Current query string, without a leading `?`
    fn current_query(&self) -> String;

    /// Replace the current query string
    fn replace(&mut self, query: &str);
}

/// Location kept in memory (terminal sessions, tests)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    query: String,
    replacements: usize,
}

impl MemoryLocation {
    /// Start at the given query string; a leading `?` is dropped
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.strip_prefix('?').map(str::to_string).unwrap_or(query);
        Self {
            query,
            replacements: 0,
        }
    }

    /// Number of times the query has been replaced
    #[must_use]
    pub const fn replacements(&self) -> usize {
        self.replacements
    }

    /// Query formatted for sharing: `?q=...`, or empty for the default state
    #[must_use]
    pub fn share_string(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }
}

impl Location for MemoryLocation {
    fn current_query(&self) -> String {
        self.query.clone()
    }

    fn replace(&mut self, query: &str) {
        self.query = query.to_string();
        self.replacements += 1;
    }
}
