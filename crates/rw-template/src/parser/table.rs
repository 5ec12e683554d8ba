//! Keyword dispatch table for directives.

use std::collections::BTreeMap;

/// Mapping from directive keyword to its handler.
///
/// Handlers are plain values (typically a fieldless enum) so dispatch is a
/// `match` at the call site. Keywords are unique and matched exactly.
#[derive(Clone, Debug)]
pub struct DirectiveTable<D> {
    handlers: BTreeMap<&'static str, D>,
}

impl<D> Default for DirectiveTable<D> {
    fn default() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }
}

impl<D: Copy> DirectiveTable<D> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `keyword`.
    ///
    /// Registering the same keyword twice is a programming error.
    pub fn register(&mut self, keyword: &'static str, handler: D) {
        let previous = self.handlers.insert(keyword, handler);
        debug_assert!(previous.is_none(), "directive '{keyword}' registered twice");
    }

    /// Handler registered for `keyword`.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<D> {
        self.handlers.get(keyword).copied()
    }

    /// Whether `keyword` is registered.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.handlers.contains_key(keyword)
    }

    /// Registered keywords in sorted order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Number of registered keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut table = DirectiveTable::new();
        table.register("model", 1);
        table.register("inject", 2);

        assert_eq!(table.get("model"), Some(1));
        assert_eq!(table.get("inject"), Some(2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup_is_exact() {
        let mut table = DirectiveTable::new();
        table.register("model", ());

        assert!(table.contains("model"));
        assert!(!table.contains("Model"));
        assert!(!table.contains("mode"));
    }

    #[test]
    fn test_keywords_sorted() {
        let mut table = DirectiveTable::new();
        table.register("route", ());
        table.register("inject", ());
        let keywords: Vec<&str> = table.keywords().collect();
        assert_eq!(keywords, ["inject", "route"]);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    #[cfg(debug_assertions)]
    fn test_duplicate_registration_panics() {
        let mut table = DirectiveTable::new();
        table.register("model", ());
        table.register("model", ());
    }
}
