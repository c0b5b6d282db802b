//! Group API operations

use crate::config::api;
use crate::error::Result;
use crate::retool::traits::ApiListResponse;
use crate::retool::RetoolClient;

use super::models::Group;

impl RetoolClient {
    /// Get all groups, built-in ones included
    pub async fn get_groups(&self) -> Result<Vec<Group>> {
        let path = format!("/{}", api::GROUPS);
        self.fetch_all_pages::<Group, ApiListResponse<Group>>(&path, "groups")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_groups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [
                    {"id": 1, "name": "admin"},
                    {"id": 7, "name": "Data Science", "universal_app_access": "edit"}
                ],
                "total_count": 2,
                "has_more": false
            })))
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        let groups = client.get_groups().await.unwrap();

        assert_eq!(groups.len(), 2);
        assert!(groups[0].is_built_in());
        assert_eq!(groups[1].id, 7);
        assert_eq!(groups[1].universal_app_access, "edit");
    }

    #[tokio::test]
    async fn test_get_groups_rejects_string_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "seven", "name": "Data Science"}]
            })))
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        let result = client.get_groups().await;

        assert!(matches!(
            result,
            Err(crate::error::RetoolError::Schema { .. })
        ));
    }
}
