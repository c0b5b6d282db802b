//! `retool_space` blocks

use crate::retool::Space;
use crate::terraform::hcl::BlockWriter;
use crate::terraform::ResourceKind;

pub(super) fn emit(terraform_id: &str, space: &Space) -> Vec<String> {
    let mut block = BlockWriter::resource(ResourceKind::Space.terraform_type(), terraform_id);
    block
        .string("name", &space.name)
        .string("domain", &space.domain);
    block.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_block() {
        let space = Space {
            id: "s1".to_string(),
            name: "Staging \"EU\"".to_string(),
            domain: "staging.example.com".to_string(),
        };
        assert_eq!(
            emit("staging_example_com", &space),
            vec![
                "resource \"retool_space\" \"staging_example_com\" {",
                "  name = \"Staging \\\"EU\\\"\"",
                "  domain = \"staging.example.com\"",
                "}",
                "",
            ]
        );
    }
}
