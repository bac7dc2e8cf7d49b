//! List query parameters

use std::collections::BTreeMap;

/// Parameters for one paginated list request.
///
/// [`cache_key`](Self::cache_key) equals the canonical query string, so two
/// queries built in different orders but carrying equal parameters share one
/// cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u64,
    page_size: u64,
    search: Option<String>,
    filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1-based page. Zero is clamped to 1.
    pub fn page(mut self, page: u64) -> Self {
        self.set_page(page);
        self
    }

    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the search term. Whitespace is trimmed; a blank term is omitted
    /// from the query entirely.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.set_search(&term.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn set_search(&mut self, term: &str) {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
    }

    pub fn current_page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.page_size
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Wire pairs in canonical order: `page`, `limit`, `search`, then
    /// filters in key order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    pub fn cache_key(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
