//! Response envelopes shared by every Cachet endpoint.
//!
//! Single resources arrive under a `data` key; collections add a `meta` key
//! with pagination details. Both wrappers are passed through as the service
//! sends them rather than re-derived client-side.

use serde::{Deserialize, Deserializer, Serialize};

/// Single-resource envelope: the payload nested under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped resource.
    pub data: T,
}

/// One page of a collection endpoint: `{"meta": {...}, "data": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Pagination details as reported by the service.
    #[serde(default)]
    pub meta: Meta,

    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Whether the service reports another page after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        let pagination = &self.meta.pagination;
        pagination.links.next_page.is_some()
            || (pagination.total_pages > 0 && pagination.current_page < pagination.total_pages)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Collection metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination state for the collection.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination state as the service reports it.
///
/// `per_page` and `current_page` echo back query parameters, and the service
/// echoes them as JSON strings; both fields accept either form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Total items across all pages.
    #[serde(default)]
    pub total: u32,

    /// Items on this page.
    #[serde(default)]
    pub count: u32,

    /// Requested page size.
    #[serde(default, deserialize_with = "u32_or_string")]
    pub per_page: u32,

    /// Current page number (1-indexed).
    #[serde(default, deserialize_with = "u32_or_string")]
    pub current_page: u32,

    /// Total page count.
    #[serde(default)]
    pub total_pages: u32,

    /// Links to neighboring pages.
    #[serde(default)]
    pub links: Links,
}

/// Links to the neighboring pages of a collection, when they exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    /// Absolute URL of the next page.
    #[serde(default)]
    pub next_page: Option<String>,

    /// Absolute URL of the previous page.
    #[serde(default)]
    pub previous_page: Option<String>,
}

/// Accept a number whether the service sends `20` or `"20"`.
fn u32_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialize() {
        let json = r#"{"data": "Pong!"}"#;
        let envelope: Envelope<String> = serde_json::from_str(json).expect("Failed to deserialize envelope");

        assert_eq!(envelope.data, "Pong!");
    }

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "meta": {
                "pagination": {
                    "total": 1,
                    "count": 1,
                    "per_page": 20,
                    "current_page": 1,
                    "total_pages": 1,
                    "links": {
                        "next_page": null,
                        "previous_page": null
                    }
                }
            },
            "data": [1, 2, 3]
        }"#;

        let page: Page<u32> = serde_json::from_str(json).expect("Failed to deserialize page");

        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
        assert_eq!(page.meta.pagination.total, 1);
        assert_eq!(page.meta.pagination.per_page, 20);
        assert_eq!(page.meta.pagination.current_page, 1);
        assert!(page.meta.pagination.links.next_page.is_none());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_accepts_stringly_numbers() {
        // Some endpoints echo per_page/current_page back as strings.
        let json = r#"{
            "meta": {
                "pagination": {
                    "total": 1,
                    "count": 1,
                    "per_page": "20",
                    "current_page": "1",
                    "total_pages": 1,
                    "links": {"next_page": null, "previous_page": null}
                }
            },
            "data": []
        }"#;

        let page: Page<u32> = serde_json::from_str(json).expect("Failed to deserialize page");

        assert_eq!(page.meta.pagination.per_page, 20);
        assert_eq!(page.meta.pagination.current_page, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_has_next_from_links() {
        let json = r#"{
            "meta": {
                "pagination": {
                    "total": 40,
                    "count": 20,
                    "per_page": 20,
                    "current_page": 1,
                    "total_pages": 2,
                    "links": {
                        "next_page": "http://demo.cachethq.io/api/v1/components?page=2",
                        "previous_page": null
                    }
                }
            },
            "data": []
        }"#;

        let page: Page<u32> = serde_json::from_str(json).expect("Failed to deserialize page");

        assert!(page.has_next());
    }

    #[test]
    fn test_page_has_next_from_page_counts() {
        // No links block, but page 1 of 3.
        let json = r#"{
            "meta": {
                "pagination": {
                    "total": 50,
                    "count": 20,
                    "per_page": 20,
                    "current_page": 1,
                    "total_pages": 3
                }
            },
            "data": []
        }"#;

        let page: Page<u32> = serde_json::from_str(json).expect("Failed to deserialize page");

        assert!(page.has_next());
    }

    #[test]
    fn test_page_missing_meta_defaults() {
        let json = r#"{"data": [7]}"#;
        let page: Page<u32> = serde_json::from_str(json).expect("Failed to deserialize page");

        assert_eq!(page.len(), 1);
        assert_eq!(page.meta.pagination.total, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_iteration() {
        let page = Page {
            meta: Meta::default(),
            data: vec![1, 2, 3],
        };

        let borrowed: Vec<u32> = (&page).into_iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3]);

        let owned: Vec<u32> = page.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }
}
