//! Canonical paginated result

use serde::{Deserialize, Serialize};

/// One page of a listed resource, after envelope normalization.
///
/// `total` counts the whole collection server-side when the backend reports
/// it; otherwise it falls back to the item count of this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: None,
            page_size: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages at this page size, when the size is known.
    pub fn page_count(&self) -> Option<u64> {
        self.page_size
            .map(|size| self.total.div_ceil(size.max(1)))
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let page = Page::<u32> {
            items: vec![1, 2, 3],
            total: 41,
            page: Some(1),
            page_size: Some(10),
        };
        assert_eq!(page.page_count(), Some(5));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let page = Page::<u32> {
            items: vec![7],
            total: 1,
            page: Some(1),
            page_size: Some(10),
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["pageSize"], 10);

        let back: Page<u32> = serde_json::from_value(value).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn test_empty_is_not_an_error_shape() {
        let page = Page::<u32>::empty();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_count(), None);
    }
}
