//! Retool HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{Result, RetoolError};
use crate::retool::connection::ConnectionSettings;
use crate::retool::traits::{ApiListResponse, ApiObjectResponse, PaginatedResponse};

/// Retool API client
pub struct RetoolClient {
    client: Client,
    token: String,
    base_url: String,
}

impl RetoolClient {
    /// Create a new client from resolved connection settings
    pub fn new(settings: &ConnectionSettings) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .timeout(settings.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: settings.token.clone(),
            base_url: settings.base_url(),
        }
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// A body that does not match `T` is reported as `RetoolError::Schema`.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(RetoolError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RetoolError::Schema {
            resource: error_context.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetch every page of a cursor-paginated listing
    ///
    /// Pages are requested one after another, following `next_token` while
    /// the server reports `has_more`. Items keep the server's order.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/folders")
    /// * `error_context` - Context for error messages (e.g., "folders")
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let mut all_items = Vec::new();
        let mut cursor: Option<String> = None;

        for page in 1..=api::MAX_PAGES {
            let url = match cursor {
                Some(ref token) => format!(
                    "{}{}?next_token={}",
                    self.base_url,
                    path,
                    urlencoding::encode(token)
                ),
                None => format!("{}{}", self.base_url, path),
            };
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;
            let page_context = if page == 1 {
                error_context.to_string()
            } else {
                format!("{} (page {})", error_context, page)
            };
            let resp: R = self.parse_api_response(response, &page_context).await?;

            let next = resp.next_token().map(str::to_string);
            all_items.extend(resp.into_data());

            match next {
                Some(token) if cursor.as_deref() == Some(token.as_str()) => {
                    return Err(RetoolError::RemoteFetchFailed {
                        resource: error_context.to_string(),
                        reason: "server returned the same page cursor twice".to_string(),
                    });
                }
                Some(token) => cursor = Some(token),
                None => {
                    debug!(
                        "Fetched {} total items for {} in {} page(s)",
                        all_items.len(),
                        error_context,
                        page
                    );
                    return Ok(all_items);
                }
            }
        }

        Err(RetoolError::RemoteFetchFailed {
            resource: error_context.to_string(),
            reason: format!("pagination did not finish after {} pages", api::MAX_PAGES),
        })
    }

    /// Fetch a single configuration object
    ///
    /// Returns `None` for 404 and for a `null` data envelope, error for other
    /// non-success status codes.
    pub async fn fetch_object<T>(&self, path: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        if response.status().as_u16() == 404 {
            debug!("{} not found (404)", resource_label);
            return Ok(None);
        }

        let envelope: ApiObjectResponse<T> =
            self.parse_api_response(response, resource_label).await?;
        Ok(envelope.data)
    }

    /// POST a query body and return the listed items of a single response
    pub async fn post_list<T, B>(&self, path: &str, body: &B, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} for {}", url, error_context);

        let response = self.post(&url).json(body).send().await?;
        let resp: ApiListResponse<T> = self.parse_api_response(response, error_context).await?;
        Ok(resp.into_data())
    }
}

#[cfg(test)]
impl RetoolClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            token: "test-token".to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug, Clone)]
    struct TestItem {
        id: String,
        name: String,
    }

    fn test_item_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "name": name })
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [test_item_json("item-1", "Item 1"), test_item_json("item-2", "Item 2")],
                "total_count": 2,
                "next_token": null,
                "has_more": false
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[1].name, "Item 2");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_cursor() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("next_token", "cursor-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [test_item_json("item-3", "Item 3")],
                "has_more": false
            })))
            .mount(&mock_server)
            .await;

        // Lower priority so the cursor-specific mock wins on the second call
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [test_item_json("item-1", "Item 1"), test_item_json("item-2", "Item 2")],
                "next_token": "cursor-2",
                "has_more": true
            })))
            .with_priority(10)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "item-1");
        assert_eq!(items[2].id, "item-3");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_repeated_cursor() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [test_item_json("item-1", "Item 1")],
                "next_token": "stuck",
                "has_more": true
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await;

        match result.unwrap_err() {
            RetoolError::RemoteFetchFailed { resource, reason } => {
                assert_eq!(resource, "test items");
                assert!(reason.contains("cursor"));
            }
            other => panic!("Expected RemoteFetchFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await;

        match result.unwrap_err() {
            RetoolError::Api { status, .. } => assert_eq!(status, 403),
            other => panic!("Expected RetoolError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_schema_mismatch() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "item-1"}]
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, ApiListResponse<TestItem>>("/test-items", "test items")
            .await;

        match result.unwrap_err() {
            RetoolError::Schema { resource, message } => {
                assert_eq!(resource, "test items");
                assert!(message.contains("name"));
            }
            other => panic!("Expected RetoolError::Schema, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_object_not_found() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_object::<TestItem>("/thing", "thing")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_object_null_data() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": true, "data": null})),
            )
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_object::<TestItem>("/thing", "thing")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_object_server_error() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client.fetch_object::<TestItem>("/thing", "thing").await;
        assert!(matches!(result, Err(RetoolError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_post_list_sends_body() {
        let mock_server = MockServer::start().await;
        let client = RetoolClient::test_client(&mock_server.uri());
        let body = serde_json::json!({"query": "x"});

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [test_item_json("item-1", "Item 1")]
            })))
            .mount(&mock_server)
            .await;

        let items: Vec<TestItem> = client.post_list("/search", &body, "search").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "item-1");
    }
}
