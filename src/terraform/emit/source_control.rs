//! `retool_source_control` and `retool_source_control_settings` blocks

use crate::retool::{GitHubAuth, SourceControlConfig, SourceControlProvider, SourceControlSettings};
use crate::terraform::hcl::BlockWriter;
use crate::terraform::ResourceKind;

pub(super) fn emit_config(terraform_id: &str, config: &SourceControlConfig) -> Vec<String> {
    let mut block =
        BlockWriter::resource(ResourceKind::SourceControl.terraform_type(), terraform_id);
    block
        .string("org", &config.org)
        .string("repo", &config.repo)
        .string("default_branch", &config.default_branch)
        .opt_string("repo_version", config.repo_version.as_deref());

    let provider = &config.provider;
    block.object(provider.block_name(), |w| match provider {
        SourceControlProvider::GitHub(github) => {
            match &github.auth {
                GitHubAuth::App {
                    app_id,
                    installation_id,
                } => {
                    w.object("app_authentication", |w| {
                        w.string("app_id", app_id)
                            .string("installation_id", installation_id)
                            .secret("private_key");
                    });
                }
                GitHubAuth::PersonalAccessToken => {
                    w.secret("personal_access_token");
                }
            }
            w.opt_string("url", github.url.as_deref())
                .opt_string("enterprise_api_url", github.enterprise_api_url.as_deref());
        }
        SourceControlProvider::GitLab(gitlab) => {
            w.number("project_id", gitlab.project_id)
                .string("url", &gitlab.url)
                .secret("project_access_token");
        }
        SourceControlProvider::AwsCodeCommit(aws) => {
            w.string("url", &aws.url)
                .string("access_key_id", &aws.access_key_id)
                .secret("secret_access_key")
                .string("region", &aws.region)
                .string("https_username", &aws.https_username)
                .secret("https_password");
        }
        SourceControlProvider::Bitbucket(bitbucket) => {
            w.string("username", &bitbucket.username)
                .opt_string("url", bitbucket.url.as_deref())
                .opt_string("enterprise_api_url", bitbucket.enterprise_api_url.as_deref())
                .secret("app_password");
        }
        SourceControlProvider::AzureRepos(azure) => {
            w.string("url", &azure.url)
                .string("project", &azure.project)
                .string("user", &azure.user)
                .secret("personal_access_token")
                .bool("use_basic_auth", azure.use_basic_auth);
        }
    });
    block.finish()
}

pub(super) fn emit_settings(terraform_id: &str, settings: &SourceControlSettings) -> Vec<String> {
    let mut block = BlockWriter::resource(
        ResourceKind::SourceControlSettings.terraform_type(),
        terraform_id,
    );
    block
        .bool("auto_branch_naming_enabled", settings.auto_branch_naming_enabled)
        .bool(
            "custom_pull_request_template_enabled",
            settings.custom_pull_request_template_enabled,
        )
        .opt_string(
            "custom_pull_request_template",
            settings.custom_pull_request_template.as_deref(),
        )
        .bool("version_control_locked", settings.version_control_locked);
    block.finish()
}
