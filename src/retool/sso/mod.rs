//! SSO module - single sign-on configuration

mod api;
mod models;

pub use models::{GoogleSso, LdapSync, OidcSso, SamlSso, SsoConfig, SsoKind};

#[cfg(test)]
pub(crate) use models::SsoConfigWire;
