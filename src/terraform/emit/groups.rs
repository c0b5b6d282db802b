//! `retool_group` blocks

use crate::retool::Group;
use crate::terraform::hcl::BlockWriter;
use crate::terraform::ResourceKind;

pub(super) fn emit(terraform_id: &str, group: &Group) -> Vec<String> {
    let mut block = BlockWriter::resource(ResourceKind::Group.terraform_type(), terraform_id);
    block
        .string("name", &group.name)
        .string("universal_app_access", &group.universal_app_access)
        .string("universal_resource_access", &group.universal_resource_access)
        .string("universal_workflow_access", &group.universal_workflow_access)
        .string(
            "universal_query_library_access",
            &group.universal_query_library_access,
        )
        .bool("user_list_access", group.user_list_access)
        .bool("audit_log_access", group.audit_log_access)
        .bool("unpublished_release_access", group.unpublished_release_access)
        .bool("usage_analytics_access", group.usage_analytics_access)
        .bool("account_details_access", group.account_details_access)
        .opt_string("landing_page_app_id", group.landing_page_app_id.as_deref());
    block.finish()
}
