//! Source control module - repository configuration and workflow settings

mod api;
mod models;

pub use models::{
    AwsCodeCommitConfig, AzureReposConfig, BitbucketConfig, GitHubAuth, GitHubConfig,
    GitLabConfig, SourceControlConfig, SourceControlProvider, SourceControlSettings,
};

#[cfg(test)]
pub(crate) use models::SourceControlConfigWire;
