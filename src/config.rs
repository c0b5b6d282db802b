/// Configuration constants for the Retool API
pub mod api {
    /// Base path for Retool API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Folders endpoint
    pub const FOLDERS: &str = "folders";

    /// Groups endpoint
    pub const GROUPS: &str = "groups";

    /// Spaces endpoint
    pub const SPACES: &str = "spaces";

    /// Permission objects listing endpoint (POST)
    pub const PERMISSIONS_LIST_OBJECTS: &str = "permissions/listObjects";

    /// Source control configuration endpoint
    pub const SOURCE_CONTROL_CONFIG: &str = "source_control/config";

    /// Source control settings endpoint
    pub const SOURCE_CONTROL_SETTINGS: &str = "source_control/settings";

    /// SSO configuration endpoint
    pub const SSO_CONFIG: &str = "sso/config";

    /// Maximum number of groups whose permissions are fetched concurrently
    pub const MAX_CONCURRENT_PERMISSION_REQUESTS: usize = 4;

    /// Upper bound on followed `next_token` cursors for a single listing
    pub const MAX_PAGES: usize = 1000;
}

/// Environment variable names
pub mod env {
    /// Retool host (e.g. my-org.retool.com)
    pub const HOST: &str = "RETOOL_HOST";

    /// Retool API access token
    pub const ACCESS_TOKEN: &str = "RETOOL_ACCESS_TOKEN";

    /// URL scheme override
    pub const SCHEME: &str = "RETOOL_SCHEME";

    /// Request timeout in seconds
    pub const TIMEOUT: &str = "RETOOL_TIMEOUT";
}

/// Terraform generation constants
pub mod terraform {
    /// Groups that exist in every organization and cannot be managed
    pub const BUILT_IN_GROUPS: &[&str] = &["admin", "viewer", "editor", "All Users"];

    /// Fallback identifier prefix for groups
    pub const GROUP_PREFIX: &str = "group_";

    /// Fallback identifier prefix for spaces
    pub const SPACE_PREFIX: &str = "space_";

    /// Suffix appended to a group identifier to name its permissions resource
    pub const PERMISSIONS_SUFFIX: &str = "_permissions";

    /// Synthetic id and identifier of the source control resource
    pub const SOURCE_CONTROL_ID: &str = "source_control";

    /// Synthetic id and identifier of the source control settings resource
    pub const SOURCE_CONTROL_SETTINGS_ID: &str = "source_control_settings";

    /// Synthetic id and identifier of the SSO resource
    pub const SSO_ID: &str = "sso";

    /// Trailing comment written in place of secret values
    pub const SECRET_PLACEHOLDER: &str =
        "# Fill in: secret values are not returned by the Retool API";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}
