//! Connection settings resolution (host, token, scheme, timeout)

use log::debug;
use std::time::Duration;

use crate::cli::{ConnectionArgs, Scheme};
use crate::config::{api, env};
use crate::error::{Result, RetoolError};

/// Resolved parameters needed to talk to the Retool API
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub scheme: Scheme,
    pub host: String,
    pub token: String,
    pub timeout: Duration,
}

impl ConnectionSettings {
    /// Resolve settings from CLI arguments.
    ///
    /// Environment variables are already folded into the arguments by clap,
    /// so a missing value here means neither the flag nor the variable was set.
    pub fn resolve(args: &ConnectionArgs) -> Result<Self> {
        let host = args
            .host
            .as_deref()
            .map(normalize_host)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| RetoolError::HostNotFound(missing_message("host", "--host", env::HOST)))?;

        let token = args
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                RetoolError::TokenNotFound(missing_message(
                    "access token",
                    "--token",
                    env::ACCESS_TOKEN,
                ))
            })?
            .to_string();

        if args.timeout == 0 {
            return Err(RetoolError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        debug!("Using Retool host {} over {}", host, args.scheme);

        Ok(Self {
            scheme: args.scheme,
            host,
            token,
            timeout: Duration::from_secs(args.timeout),
        })
    }

    /// Build the base URL for API requests
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}/{}",
            self.scheme,
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }
}

/// Strip an accidental scheme prefix and trailing slashes from a host
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

fn missing_message(what: &str, flag: &str, env_var: &str) -> String {
    format!(
        "No Retool {} specified. Please provide it using one of:\n\
         \n\
         1. CLI argument:      retool terraform {} <VALUE>\n\
         2. Environment var:   export {}=<VALUE>\n",
        what, flag, env_var
    )
}
