//! DTOs exposed by the `/Blogs` endpoints.

use serde::Deserialize;

use crate::domain::blog::Blog;

/// Window parameters accepted by `GET /Blogs`, following json-server naming.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BlogsQuery {
    /// Index of the first record, defaults to 0.
    #[serde(rename = "_start")]
    pub start: Option<usize>,
    /// Index one past the last record.
    #[serde(rename = "_end")]
    pub end: Option<usize>,
    /// Window size used when `_end` is absent.
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

/// Result payload returned by [`crate::services::blogs::list_blogs`].
#[derive(Debug)]
pub struct BlogsResponse {
    /// Total number of blogs in the collection.
    pub total: usize,
    /// Records inside the requested window.
    pub blogs: Vec<Blog>,
}
