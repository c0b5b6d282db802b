//! SSO data models
//!
//! The API returns one flat object whose `config_type` decides which of the
//! provider fields are meaningful. It is converted into [`SsoConfig`] so each
//! configuration shape only carries the fields that apply to it.

use serde::Deserialize;

use crate::error::{Result, RetoolError};

const RESOURCE: &str = "SSO configuration";

/// SSO configuration as sent by the API
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct SsoConfigWire {
    pub config_type: String,
    #[serde(default)]
    pub disable_email_password_login: bool,
    pub google_client_id: Option<String>,
    pub oidc_client_id: Option<String>,
    pub oidc_scopes: Option<String>,
    pub oidc_auth_url: Option<String>,
    pub oidc_token_url: Option<String>,
    pub oidc_userinfo_url: Option<String>,
    pub oidc_audience: Option<String>,
    pub jwt_email_key: Option<String>,
    pub jwt_roles_key: Option<String>,
    pub jwt_first_name_key: Option<String>,
    pub jwt_last_name_key: Option<String>,
    pub roles_mapping: Option<String>,
    pub jit_enabled: Option<bool>,
    pub restricted_domain: Option<String>,
    pub trigger_login_automatically: Option<bool>,
    pub saml_first_name_attribute: Option<String>,
    pub saml_last_name_attribute: Option<String>,
    pub saml_groups_attribute: Option<String>,
    pub saml_sync_group_claims: Option<bool>,
    pub saml_idp_metadata_xml: Option<String>,
    pub ldap_sync_group_claims: Option<bool>,
    pub ldap_role_mapping: Option<String>,
    pub ldap_server_url: Option<String>,
    pub ldap_base_domain_components: Option<String>,
    pub ldap_server_name: Option<String>,
    pub ldap_server_certificate: Option<String>,
}

/// Typed SSO configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoConfig {
    pub disable_email_password_login: bool,
    pub kind: SsoKind,
}

/// The five supported SSO shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsoKind {
    Google(GoogleSso),
    Oidc(OidcSso),
    GoogleOidc { google: GoogleSso, oidc: OidcSso },
    Saml(SamlSso),
    GoogleSaml { google: GoogleSso, saml: SamlSso },
}

impl SsoKind {
    /// The `config_type` tag used by the API
    pub fn config_type(&self) -> &'static str {
        match self {
            SsoKind::Google(_) => "google",
            SsoKind::Oidc(_) => "oidc",
            SsoKind::GoogleOidc { .. } => "google & oidc",
            SsoKind::Saml(_) => "saml",
            SsoKind::GoogleSaml { .. } => "google & saml",
        }
    }

    pub fn google(&self) -> Option<&GoogleSso> {
        match self {
            SsoKind::Google(google)
            | SsoKind::GoogleOidc { google, .. }
            | SsoKind::GoogleSaml { google, .. } => Some(google),
            _ => None,
        }
    }

    pub fn oidc(&self) -> Option<&OidcSso> {
        match self {
            SsoKind::Oidc(oidc) | SsoKind::GoogleOidc { oidc, .. } => Some(oidc),
            _ => None,
        }
    }

    pub fn saml(&self) -> Option<&SamlSso> {
        match self {
            SsoKind::Saml(saml) | SsoKind::GoogleSaml { saml, .. } => Some(saml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleSso {
    pub client_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcSso {
    pub client_id: String,
    pub scopes: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: Option<String>,
    pub audience: Option<String>,
    pub jwt_email_key: String,
    pub jwt_roles_key: Option<String>,
    pub jwt_first_name_key: String,
    pub jwt_last_name_key: String,
    /// Arrow syntax, e.g. `"admin->admin,dev->editor"`
    pub roles_mapping: Option<String>,
    pub jit_enabled: bool,
    pub restricted_domain: Option<String>,
    pub trigger_login_automatically: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamlSso {
    pub idp_metadata_xml: String,
    pub first_name_attribute: String,
    pub last_name_attribute: String,
    pub groups_attribute: Option<String>,
    pub sync_group_claims: bool,
    pub jit_enabled: bool,
    pub restricted_domain: Option<String>,
    pub trigger_login_automatically: bool,
    pub ldap: Option<LdapSync>,
}

/// LDAP group sync settings of a SAML setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdapSync {
    pub server_url: String,
    pub base_domain_components: Option<String>,
    pub server_name: Option<String>,
    pub server_certificate: Option<String>,
    pub sync_group_claims: bool,
    /// Arrow syntax with repeated keys, e.g. `"eng -> editor, eng -> viewer"`
    pub role_mapping: Option<String>,
}

fn required(value: Option<String>, field: &str, config_type: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RetoolError::Schema {
            resource: RESOURCE.to_string(),
            message: format!("'{}' configuration without {}", config_type, field),
        })
}

impl SsoConfigWire {
    fn google(&mut self) -> Result<GoogleSso> {
        Ok(GoogleSso {
            client_id: required(
                self.google_client_id.take(),
                "google_client_id",
                &self.config_type,
            )?,
        })
    }

    fn oidc(&mut self) -> Result<OidcSso> {
        let ct = self.config_type.clone();
        Ok(OidcSso {
            client_id: required(self.oidc_client_id.take(), "oidc_client_id", &ct)?,
            scopes: required(self.oidc_scopes.take(), "oidc_scopes", &ct)?,
            auth_url: required(self.oidc_auth_url.take(), "oidc_auth_url", &ct)?,
            token_url: required(self.oidc_token_url.take(), "oidc_token_url", &ct)?,
            userinfo_url: self.oidc_userinfo_url.take(),
            audience: self.oidc_audience.take(),
            jwt_email_key: required(self.jwt_email_key.take(), "jwt_email_key", &ct)?,
            jwt_roles_key: self.jwt_roles_key.take(),
            jwt_first_name_key: required(self.jwt_first_name_key.take(), "jwt_first_name_key", &ct)?,
            jwt_last_name_key: required(self.jwt_last_name_key.take(), "jwt_last_name_key", &ct)?,
            roles_mapping: self.roles_mapping.take(),
            jit_enabled: self.jit_enabled.unwrap_or(false),
            restricted_domain: self.restricted_domain.clone(),
            trigger_login_automatically: self.trigger_login_automatically.unwrap_or(false),
        })
    }

    fn saml(&mut self) -> Result<SamlSso> {
        let ct = self.config_type.clone();
        let ldap = self.ldap_server_url.take().map(|server_url| LdapSync {
            server_url,
            base_domain_components: self.ldap_base_domain_components.take(),
            server_name: self.ldap_server_name.take(),
            server_certificate: self.ldap_server_certificate.take(),
            sync_group_claims: self.ldap_sync_group_claims.unwrap_or(false),
            role_mapping: self.ldap_role_mapping.take(),
        });
        Ok(SamlSso {
            idp_metadata_xml: required(
                self.saml_idp_metadata_xml.take(),
                "saml_idp_metadata_xml",
                &ct,
            )?,
            first_name_attribute: required(
                self.saml_first_name_attribute.take(),
                "saml_first_name_attribute",
                &ct,
            )?,
            last_name_attribute: required(
                self.saml_last_name_attribute.take(),
                "saml_last_name_attribute",
                &ct,
            )?,
            groups_attribute: self.saml_groups_attribute.take(),
            sync_group_claims: self.saml_sync_group_claims.unwrap_or(false),
            jit_enabled: self.jit_enabled.unwrap_or(false),
            restricted_domain: self.restricted_domain.clone(),
            trigger_login_automatically: self.trigger_login_automatically.unwrap_or(false),
            ldap,
        })
    }
}

impl TryFrom<SsoConfigWire> for SsoConfig {
    type Error = RetoolError;

    fn try_from(mut wire: SsoConfigWire) -> Result<Self> {
        let normalized = wire
            .config_type
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let kind = match normalized.as_str() {
            "google" => SsoKind::Google(wire.google()?),
            "oidc" => SsoKind::Oidc(wire.oidc()?),
            "google & oidc" => SsoKind::GoogleOidc {
                google: wire.google()?,
                oidc: wire.oidc()?,
            },
            "saml" => SsoKind::Saml(wire.saml()?),
            "google & saml" => SsoKind::GoogleSaml {
                google: wire.google()?,
                saml: wire.saml()?,
            },
            _ => {
                return Err(RetoolError::Schema {
                    resource: RESOURCE.to_string(),
                    message: format!("unknown config_type '{}'", wire.config_type),
                })
            }
        };

        Ok(SsoConfig {
            disable_email_password_login: wire.disable_email_password_login,
            kind,
        })
    }
}
