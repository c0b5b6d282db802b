//! `retool_permissions` blocks with symbolic group and folder references

use crate::error::Result;
use crate::terraform::hcl::{id_reference, BlockWriter};
use crate::terraform::references::References;
use crate::terraform::{GroupPermissions, ResourceKind};

pub(super) fn emit(
    terraform_id: &str,
    permissions: &GroupPermissions,
    refs: &References,
) -> Result<Vec<String>> {
    let subject = refs.group_reference(permissions.group_id, terraform_id)?;

    let mut block = BlockWriter::resource(ResourceKind::Permissions.terraform_type(), terraform_id);
    block.object("subject", |w| {
        w.string("type", "group").expression("id", &subject);
    });
    block.object_list("permissions", &permissions.entries, |w, entry| {
        let folder = if entry.is_folder() {
            refs.folder_by_id(&entry.id)
        } else {
            None
        };
        w.object("object", |w| {
            w.string("type", &entry.object_type);
            match folder {
                Some(folder) => {
                    w.expression(
                        "id",
                        &id_reference(ResourceKind::Folder.terraform_type(), folder),
                    );
                }
                None => {
                    w.string("id", &entry.id);
                }
            }
        });
        w.string("access_level", &entry.access_level);
    });
    Ok(block.finish())
}
