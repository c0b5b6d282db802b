//! Common response envelopes for Retool API endpoints

use serde::Deserialize;

/// Trait for API responses that contain a page of data
///
/// Implement this trait for any list envelope to enable use with
/// `RetoolClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Cursor for the next page, if there is one
    fn next_token(&self) -> Option<&str>;
}

/// Generic API list response wrapper for cursor-paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub has_more: Option<bool>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn next_token(&self) -> Option<&str> {
        if !self.has_more.unwrap_or(false) {
            return None;
        }
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Envelope of single-object endpoints; `data` is null when nothing is configured
#[derive(Deserialize, Debug)]
pub struct ApiObjectResponse<T> {
    pub data: Option<T>,
}
