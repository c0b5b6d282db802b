//! `retool_sso` blocks for Google, OIDC and SAML setups

use crate::retool::sso::{LdapSync, OidcSso, SamlSso};
use crate::retool::SsoConfig;
use crate::terraform::hcl::BlockWriter;
use crate::terraform::mapping::{parse_multi_valued, parse_single_valued};
use crate::terraform::ResourceKind;

pub(super) fn emit(terraform_id: &str, config: &SsoConfig) -> Vec<String> {
    let mut block = BlockWriter::resource(ResourceKind::Sso.terraform_type(), terraform_id);

    if let Some(google) = config.kind.google() {
        block.object("google", |w| {
            w.string("client_id", &google.client_id)
                .secret("client_secret");
        });
    }
    if let Some(oidc) = config.kind.oidc() {
        block.object("oidc", |w| oidc_attributes(w, oidc));
    }
    if let Some(saml) = config.kind.saml() {
        block.object("saml", |w| saml_attributes(w, saml));
    }

    block.bool(
        "disable_email_password_login",
        config.disable_email_password_login,
    );
    block.finish()
}

fn oidc_attributes(w: &mut BlockWriter, oidc: &OidcSso) {
    w.string("client_id", &oidc.client_id)
        .secret("client_secret")
        .string("scopes", &oidc.scopes)
        .string("auth_url", &oidc.auth_url)
        .string("token_url", &oidc.token_url)
        .opt_string("userinfo_url", oidc.userinfo_url.as_deref())
        .opt_string("audience", oidc.audience.as_deref())
        .string("jwt_email_key", &oidc.jwt_email_key)
        .opt_string("jwt_roles_key", oidc.jwt_roles_key.as_deref())
        .string("jwt_first_name_key", &oidc.jwt_first_name_key)
        .string("jwt_last_name_key", &oidc.jwt_last_name_key);
    if let Some(mapping) = oidc.roles_mapping.as_deref() {
        w.string_map("roles_mapping", &parse_single_valued(mapping));
    }
    w.bool("jit_enabled", oidc.jit_enabled)
        .opt_string("restricted_domain", oidc.restricted_domain.as_deref())
        .bool(
            "trigger_login_automatically",
            oidc.trigger_login_automatically,
        );
}

fn saml_attributes(w: &mut BlockWriter, saml: &SamlSso) {
    w.heredoc("idp_metadata_xml", &saml.idp_metadata_xml)
        .string("saml_first_name_attribute", &saml.first_name_attribute)
        .string("saml_last_name_attribute", &saml.last_name_attribute)
        .opt_string("saml_groups_attribute", saml.groups_attribute.as_deref())
        .bool("saml_sync_group_claims", saml.sync_group_claims)
        .bool("jit_enabled", saml.jit_enabled)
        .opt_string("restricted_domain", saml.restricted_domain.as_deref())
        .bool(
            "trigger_login_automatically",
            saml.trigger_login_automatically,
        );
    if let Some(ldap) = &saml.ldap {
        ldap_attributes(w, ldap);
    }
}

fn ldap_attributes(w: &mut BlockWriter, ldap: &LdapSync) {
    w.bool("ldap_sync_group_claims", ldap.sync_group_claims);
    if let Some(mapping) = ldap.role_mapping.as_deref() {
        w.list_map("ldap_role_mapping", &parse_multi_valued(mapping));
    }
    w.string("ldap_server_url", &ldap.server_url)
        .opt_string(
            "ldap_base_domain_components",
            ldap.base_domain_components.as_deref(),
        )
        .opt_string("ldap_server_name", ldap.server_name.as_deref())
        .secret("ldap_server_key");
    match ldap.server_certificate.as_deref() {
        Some(cert) if cert.contains('\n') => {
            w.heredoc("ldap_server_certificate", cert);
        }
        cert => {
            w.opt_string("ldap_server_certificate", cert);
        }
    }
}
