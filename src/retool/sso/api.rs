//! SSO API operations

use crate::config::api;
use crate::error::Result;
use crate::retool::RetoolClient;

use super::models::{SsoConfig, SsoConfigWire};

impl RetoolClient {
    /// Get the SSO configuration, `None` when SSO is not set up
    pub async fn get_sso_config(&self) -> Result<Option<SsoConfig>> {
        let path = format!("/{}", api::SSO_CONFIG);
        let wire: Option<SsoConfigWire> = self.fetch_object(&path, "SSO configuration").await?;
        wire.map(SsoConfig::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RetoolError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_sso_config() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sso/config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "config_type": "google",
                    "google_client_id": "gid",
                    "disable_email_password_login": false
                }
            })))
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        let config = client.get_sso_config().await.unwrap().unwrap();
        assert_eq!(config.kind.config_type(), "google");
    }

    #[tokio::test]
    async fn test_get_sso_config_not_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sso/config"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": true, "data": null})),
            )
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        assert!(client.get_sso_config().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_sso_config_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sso/config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"config_type": "saml"}
            })))
            .mount(&mock_server)
            .await;

        let client = RetoolClient::test_client(&mock_server.uri());
        assert!(matches!(
            client.get_sso_config().await,
            Err(RetoolError::Schema { .. })
        ));
    }
}
