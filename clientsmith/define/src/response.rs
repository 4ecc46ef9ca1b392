//! Response shape hints.
//!
//! APIs wrap their payloads in different ways: a list may live under
//! `data`, `results` or `items`, a single record under `user` or nowhere at
//! all. [`ResponseFormat`] records those key names so generated resources
//! can unwrap responses before handing them to the wrapper types.

use serde::Deserialize;

/// Key names describing how response bodies are shaped.
///
/// A format can be declared globally on [`ApiConfig`](crate::ApiConfig) and
/// overridden per resource. Overrides are merged field by field with
/// [`ResponseFormat::merged_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponseFormat {
    /// Key holding the item list in collection responses (e.g. `"results"`).
    pub collection_root: Option<String>,
    /// Key holding the record in single-item responses (e.g. `"user"`).
    pub item_root: Option<String>,
    /// Pagination key names inside collection responses.
    pub pagination: Option<Pagination>,
}

/// Pagination key names inside a collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Key holding the next page reference (generated default: `next_href`).
    pub next_page_key: Option<String>,
    /// Key holding the total number of records.
    pub total_count_key: Option<String>,
    /// Key holding the page size.
    pub limit_key: Option<String>,
}

impl ResponseFormat {
    /// Merges this (resource-level) format over a global fallback.
    ///
    /// Each top-level field falls back independently. `pagination` is taken
    /// as a whole from whichever side declares it; its inner keys are not
    /// merged.
    ///
    /// ## Examples
    ///
    /// ```
    /// use clientsmith_define::ResponseFormat;
    ///
    /// let global = ResponseFormat {
    ///     collection_root: Some("data".to_string()),
    ///     item_root: Some("item".to_string()),
    ///     pagination: None,
    /// };
    /// let resource = ResponseFormat {
    ///     collection_root: Some("users".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let merged = resource.merged_with(&global);
    /// assert_eq!(merged.collection_root.as_deref(), Some("users"));
    /// assert_eq!(merged.item_root.as_deref(), Some("item"));
    /// ```
    pub fn merged_with(&self, fallback: &ResponseFormat) -> ResponseFormat {
        ResponseFormat {
            collection_root: self
                .collection_root
                .clone()
                .or_else(|| fallback.collection_root.clone()),
            item_root: self.item_root.clone().or_else(|| fallback.item_root.clone()),
            pagination: self
                .pagination
                .clone()
                .or_else(|| fallback.pagination.clone()),
        }
    }

    /// Configured next-page key, if any.
    pub fn next_page_key(&self) -> Option<&str> {
        self.pagination.as_ref()?.next_page_key.as_deref()
    }

    /// Configured total-count key, if any.
    pub fn total_count_key(&self) -> Option<&str> {
        self.pagination.as_ref()?.total_count_key.as_deref()
    }

    /// Configured page-size key, if any.
    pub fn limit_key(&self) -> Option<&str> {
        self.pagination.as_ref()?.limit_key.as_deref()
    }
}
