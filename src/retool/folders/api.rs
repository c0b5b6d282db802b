//! Folder API operations

use crate::config::api;
use crate::error::Result;
use crate::retool::traits::ApiListResponse;
use crate::retool::RetoolClient;

use super::models::Folder;

impl RetoolClient {
    /// Get all folders of every type, system folders included
    pub async fn get_folders(&self) -> Result<Vec<Folder>> {
        let path = format!("/{}", api::FOLDERS);
        self.fetch_all_pages::<Folder, ApiListResponse<Folder>>(&path, "folders")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RetoolError;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_folders() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/folders"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [
                    {
                        "id": "root1",
                        "name": "root",
                        "folder_type": "app",
                        "is_system_folder": true,
                        "parent_folder_id": null
                    },
                    {
                        "id": "f1",
                        "name": "Team Apps",
                        "folder_type": "app",
                        "is_system_folder": false,
                        "parent_folder_id": "root1"
                    }
                ],
                "total_count": 2,
                "has_more": false
            })))
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        let folders = client.get_folders().await.unwrap();

        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].id, "root1");
        assert!(folders[0].is_system_folder);
        assert_eq!(folders[1].name, "Team Apps");
    }

    #[tokio::test]
    async fn test_get_folders_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/folders"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        let result = client.get_folders().await;

        assert!(matches!(result, Err(RetoolError::Api { status: 401, .. })));
    }
}
