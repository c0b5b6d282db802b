//! `retool_folder` blocks

use crate::error::Result;
use crate::retool::Folder;
use crate::terraform::hcl::BlockWriter;
use crate::terraform::references::References;
use crate::terraform::ResourceKind;

pub(super) fn emit(terraform_id: &str, folder: &Folder, refs: &References) -> Result<Vec<String>> {
    let mut block = BlockWriter::resource(ResourceKind::Folder.terraform_type(), terraform_id);
    block
        .string("name", &folder.name)
        .string("folder_type", &folder.folder_type);
    if let Some(parent) = refs.parent_reference(folder, terraform_id)? {
        block.expression("parent_folder_id", &parent);
    }
    Ok(block.finish())
}
