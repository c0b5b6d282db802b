//! Rendering of import blocks and resource configuration

mod folders;
mod groups;
mod permissions;
mod source_control;
mod spaces;
mod sso;

use log::debug;

use crate::error::Result;

use super::hcl::import_block;
use super::import::ImportSnapshot;
use super::references::References;
use super::{ImportableResource, ResourcePayload};

/// Render one `import` stanza per resource, in list order
pub fn render_imports(resources: &[ImportableResource]) -> String {
    resources
        .iter()
        .flat_map(|resource| import_block(&resource.address(), &resource.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one `resource` block per resource, in list order
pub fn render_config(snapshot: &ImportSnapshot) -> Result<String> {
    let refs = References::build(&snapshot.resources, snapshot.roots.clone());
    let mut lines = Vec::new();
    for resource in &snapshot.resources {
        lines.extend(emit_resource(resource, &refs)?);
    }
    debug!("Rendered {} configuration line(s)", lines.len());
    Ok(lines.join("\n"))
}

/// Lines of the resource block for a single record
pub fn emit_resource(resource: &ImportableResource, refs: &References) -> Result<Vec<String>> {
    let tid = resource.terraform_id.as_str();
    match &resource.payload {
        ResourcePayload::Folder(folder) => folders::emit(tid, folder, refs),
        ResourcePayload::Group(group) => Ok(groups::emit(tid, group)),
        ResourcePayload::Permissions(permissions) => permissions::emit(tid, permissions, refs),
        ResourcePayload::Space(space) => Ok(spaces::emit(tid, space)),
        ResourcePayload::SourceControl(config) => Ok(source_control::emit_config(tid, config)),
        ResourcePayload::SourceControlSettings(settings) => {
            Ok(source_control::emit_settings(tid, settings))
        }
        ResourcePayload::Sso(config) => Ok(sso::emit(tid, config)),
    }
}
