//! Source control data models
//!
//! The API sends a provider name next to a provider-specific `config` object.
//! The body is read into a loose wire struct first and then converted into
//! [`SourceControlConfig`], so an unknown provider or a missing field is
//! reported as a schema error instead of being guessed at.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RetoolError};
use crate::retool::de::opt_string_or_number;

const RESOURCE: &str = "source control configuration";

/// Source control configuration as sent by the API
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct SourceControlConfigWire {
    pub provider: String,
    pub org: String,
    pub repo: String,
    pub default_branch: String,
    #[serde(default)]
    pub repo_version: Option<String>,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Typed source control configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceControlConfig {
    pub org: String,
    pub repo: String,
    pub default_branch: String,
    pub repo_version: Option<String>,
    pub provider: SourceControlProvider,
}

/// Provider-specific connection details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceControlProvider {
    GitHub(GitHubConfig),
    GitLab(GitLabConfig),
    AwsCodeCommit(AwsCodeCommitConfig),
    Bitbucket(BitbucketConfig),
    AzureRepos(AzureReposConfig),
}

impl SourceControlProvider {
    /// Attribute name of the provider object in the resource block
    pub fn block_name(&self) -> &'static str {
        match self {
            SourceControlProvider::GitHub(_) => "github",
            SourceControlProvider::GitLab(_) => "gitlab",
            SourceControlProvider::AwsCodeCommit(_) => "aws_codecommit",
            SourceControlProvider::Bitbucket(_) => "bitbucket",
            SourceControlProvider::AzureRepos(_) => "azure_repos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub auth: GitHubAuth,
    pub url: Option<String>,
    pub enterprise_api_url: Option<String>,
}

/// How the GitHub integration authenticates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubAuth {
    App {
        app_id: String,
        installation_id: String,
    },
    PersonalAccessToken,
}

#[derive(Deserialize, Debug)]
struct GitHubConfigWire {
    #[serde(rename = "type")]
    auth_type: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    app_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    installation_id: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    enterprise_api_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitLabConfig {
    pub project_id: u64,
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AwsCodeCommitConfig {
    pub url: String,
    pub access_key_id: String,
    pub region: String,
    pub https_username: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BitbucketConfig {
    pub username: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub enterprise_api_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AzureReposConfig {
    pub url: String,
    pub project: String,
    pub user: String,
    #[serde(default)]
    pub use_basic_auth: bool,
}

/// Protected-branch and pull request settings
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceControlSettings {
    #[serde(default)]
    pub auto_branch_naming_enabled: bool,
    #[serde(default)]
    pub custom_pull_request_template_enabled: bool,
    #[serde(default)]
    pub custom_pull_request_template: Option<String>,
    #[serde(default)]
    pub version_control_locked: bool,
}

fn schema_error(message: String) -> RetoolError {
    RetoolError::Schema {
        resource: RESOURCE.to_string(),
        message,
    }
}

fn parse_provider_config<T: DeserializeOwned>(value: serde_json::Value, provider: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| schema_error(format!("invalid {} config: {}", provider, e)))
}

/// Canonical provider key: lowercase with spaces, dashes and underscores removed
fn provider_key(provider: &str) -> String {
    provider
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<GitHubConfigWire> for GitHubConfig {
    type Error = RetoolError;

    fn try_from(wire: GitHubConfigWire) -> Result<Self> {
        let auth = match wire.auth_type.to_ascii_lowercase().as_str() {
            "app" => GitHubAuth::App {
                app_id: wire
                    .app_id
                    .ok_or_else(|| schema_error("GitHub App config without app_id".to_string()))?,
                installation_id: wire.installation_id.ok_or_else(|| {
                    schema_error("GitHub App config without installation_id".to_string())
                })?,
            },
            "personal" => GitHubAuth::PersonalAccessToken,
            other => {
                return Err(schema_error(format!(
                    "unknown GitHub authentication type '{}'",
                    other
                )))
            }
        };
        Ok(GitHubConfig {
            auth,
            url: wire.url,
            enterprise_api_url: wire.enterprise_api_url,
        })
    }
}

impl TryFrom<SourceControlConfigWire> for SourceControlConfig {
    type Error = RetoolError;

    fn try_from(wire: SourceControlConfigWire) -> Result<Self> {
        let provider = match provider_key(&wire.provider).as_str() {
            "github" => {
                let gh: GitHubConfigWire = parse_provider_config(wire.config, &wire.provider)?;
                SourceControlProvider::GitHub(gh.try_into()?)
            }
            "gitlab" => SourceControlProvider::GitLab(parse_provider_config(
                wire.config,
                &wire.provider,
            )?),
            "awscodecommit" => SourceControlProvider::AwsCodeCommit(parse_provider_config(
                wire.config,
                &wire.provider,
            )?),
            "bitbucket" => SourceControlProvider::Bitbucket(parse_provider_config(
                wire.config,
                &wire.provider,
            )?),
            "azurerepos" => SourceControlProvider::AzureRepos(parse_provider_config(
                wire.config,
                &wire.provider,
            )?),
            _ => {
                return Err(schema_error(format!(
                    "unknown provider '{}'",
                    wire.provider
                )))
            }
        };

        Ok(SourceControlConfig {
            org: wire.org,
            repo: wire.repo,
            default_branch: wire.default_branch,
            repo_version: wire.repo_version,
            provider,
        })
    }
}
