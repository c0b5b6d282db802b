//! Cross-resource reference resolution
//!
//! Folder parents and permission subjects are written as symbolic references
//! to other generated resources instead of literal remote ids.

use std::collections::HashMap;

use crate::error::{Result, RetoolError};
use crate::retool::Folder;

use super::hcl::id_reference;
use super::{ImportableResource, ResourceKind, ResourcePayload};

/// Native id of the implicit root folder of each folder type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootFolders {
    by_type: HashMap<String, String>,
}

impl RootFolders {
    /// Pick the root of each folder type from an unfiltered folder listing.
    ///
    /// A root has no parent. When a type has several parentless folders the
    /// system folder wins, then the lowest id.
    pub fn from_folders(folders: &[Folder]) -> Self {
        let mut chosen: HashMap<&str, &Folder> = HashMap::new();
        for folder in folders.iter().filter(|f| f.is_parentless()) {
            let replace = match chosen.get(folder.folder_type.as_str()) {
                None => true,
                Some(current) => {
                    (folder.is_system_folder, std::cmp::Reverse(&folder.id))
                        > (current.is_system_folder, std::cmp::Reverse(&current.id))
                }
            };
            if replace {
                chosen.insert(folder.folder_type.as_str(), folder);
            }
        }
        Self {
            by_type: chosen
                .into_iter()
                .map(|(folder_type, folder)| (folder_type.to_string(), folder.id.clone()))
                .collect(),
        }
    }

    pub fn root_of(&self, folder_type: &str) -> Option<&str> {
        self.by_type.get(folder_type).map(String::as_str)
    }

    pub fn is_root(&self, folder_type: &str, folder_id: &str) -> bool {
        self.root_of(folder_type) == Some(folder_id)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Lookup tables from remote ids to generated identifiers
#[derive(Debug, Default)]
pub struct References {
    roots: RootFolders,
    folders: HashMap<(String, String), String>,
    /// Folder id to identifier, `None` when the id exists under several folder types
    folders_by_id: HashMap<String, Option<String>>,
    groups: HashMap<u64, String>,
}

impl References {
    pub fn build(resources: &[ImportableResource], roots: RootFolders) -> Self {
        let mut refs = Self {
            roots,
            ..Self::default()
        };
        for resource in resources {
            match &resource.payload {
                ResourcePayload::Folder(folder) => {
                    refs.folders.insert(
                        (folder.folder_type.clone(), folder.id.clone()),
                        resource.terraform_id.clone(),
                    );
                    refs.folders_by_id
                        .entry(folder.id.clone())
                        .and_modify(|existing| *existing = None)
                        .or_insert_with(|| Some(resource.terraform_id.clone()));
                }
                ResourcePayload::Group(group) => {
                    refs.groups.insert(group.id, resource.terraform_id.clone());
                }
                _ => {}
            }
        }
        refs
    }

    /// Identifier of a folder of the given type
    pub fn folder(&self, folder_type: &str, id: &str) -> Option<&str> {
        self.folders
            .get(&(folder_type.to_string(), id.to_string()))
            .map(String::as_str)
    }

    /// Identifier of a folder known only by id, if the id is unambiguous
    pub fn folder_by_id(&self, id: &str) -> Option<&str> {
        self.folders_by_id.get(id).and_then(|tid| tid.as_deref())
    }

    pub fn group(&self, id: u64) -> Option<&str> {
        self.groups.get(&id).map(String::as_str)
    }

    /// Reference expression for a folder's parent, `None` when it sits under its type's root
    pub fn parent_reference(&self, folder: &Folder, terraform_id: &str) -> Result<Option<String>> {
        let parent_id = match folder.parent_folder_id.as_deref() {
            None => return Ok(None),
            Some(id) => id,
        };
        if self.roots.is_root(&folder.folder_type, parent_id) {
            return Ok(None);
        }
        match self.folder(&folder.folder_type, parent_id) {
            Some(parent) => Ok(Some(id_reference(
                ResourceKind::Folder.terraform_type(),
                parent,
            ))),
            None => Err(RetoolError::DanglingReference {
                kind: "Folder".to_string(),
                id: parent_id.to_string(),
                referenced_by: format!(
                    "{}.{}",
                    ResourceKind::Folder.terraform_type(),
                    terraform_id
                ),
            }),
        }
    }

    /// Reference expression for the group owning a permissions resource
    pub fn group_reference(&self, group_id: u64, terraform_id: &str) -> Result<String> {
        self.group(group_id)
            .map(|group| id_reference(ResourceKind::Group.terraform_type(), group))
            .ok_or_else(|| RetoolError::DanglingReference {
                kind: "Group".to_string(),
                id: group_id.to_string(),
                referenced_by: format!(
                    "{}.{}",
                    ResourceKind::Permissions.terraform_type(),
                    terraform_id
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, folder_type: &str, parent: Option<&str>, system: bool) -> Folder {
        Folder {
            id: id.to_string(),
            name: id.to_string(),
            folder_type: folder_type.to_string(),
            is_system_folder: system,
            parent_folder_id: parent.map(String::from),
        }
    }

    fn folder_resource(f: Folder, tid: &str) -> ImportableResource {
        ImportableResource {
            id: f.id.clone(),
            terraform_id: tid.to_string(),
            payload: ResourcePayload::Folder(f),
        }
    }

    #[test]
    fn test_root_folders_per_type() {
        let roots = RootFolders::from_folders(&[
            folder("root_app", "app", None, true),
            folder("root_wf", "workflow", None, true),
            folder("f1", "app", Some("root_app"), false),
        ]);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots.root_of("app"), Some("root_app"));
        assert_eq!(roots.root_of("workflow"), Some("root_wf"));
        assert!(roots.root_of("file").is_none());
    }

    #[test]
    fn test_root_folder_prefers_system_then_lowest_id() {
        let roots = RootFolders::from_folders(&[
            folder("b", "app", None, false),
            folder("z", "app", None, true),
            folder("y", "app", None, true),
        ]);
        assert_eq!(roots.root_of("app"), Some("y"));
    }

    #[test]
    fn test_parent_reference_root_is_omitted() {
        let roots = RootFolders::from_folders(&[folder("root1", "app", None, true)]);
        let child = folder("f1", "app", Some("root1"), false);
        let refs = References::build(&[folder_resource(child.clone(), "team_apps")], roots);
        assert_eq!(refs.parent_reference(&child, "team_apps").unwrap(), None);
    }

    #[test]
    fn test_parent_reference_symbolic() {
        let roots = RootFolders::from_folders(&[folder("root1", "app", None, true)]);
        let parent = folder("f1", "app", Some("root1"), false);
        let child = folder("f2", "app", Some("f1"), false);
        let refs = References::build(
            &[
                folder_resource(parent, "team"),
                folder_resource(child.clone(), "reports"),
            ],
            roots,
        );
        assert_eq!(
            refs.parent_reference(&child, "reports").unwrap().as_deref(),
            Some("retool_folder.team.id")
        );
    }

    #[test]
    fn test_parent_reference_is_scoped_by_type() {
        let roots = RootFolders::default();
        let workflow_folder = folder("f1", "workflow", None, false);
        let child = folder("f2", "app", Some("f1"), false);
        let refs = References::build(&[folder_resource(workflow_folder, "wf")], roots);
        assert!(matches!(
            refs.parent_reference(&child, "child"),
            Err(RetoolError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_dangling_parent() {
        let child = folder("f2", "app", Some("gone"), false);
        let refs = References::build(&[], RootFolders::default());
        let err = refs.parent_reference(&child, "child").unwrap_err();
        match err {
            RetoolError::DanglingReference {
                kind,
                id,
                referenced_by,
            } => {
                assert_eq!(kind, "Folder");
                assert_eq!(id, "gone");
                assert_eq!(referenced_by, "retool_folder.child");
            }
            other => panic!("Expected DanglingReference, got {:?}", other),
        }
    }

    #[test]
    fn test_folder_by_id_ambiguous() {
        let refs = References::build(
            &[
                folder_resource(folder("1", "app", None, false), "apps"),
                folder_resource(folder("1", "workflow", None, false), "flows"),
                folder_resource(folder("2", "app", None, false), "other"),
            ],
            RootFolders::default(),
        );
        assert_eq!(refs.folder_by_id("1"), None);
        assert_eq!(refs.folder_by_id("2"), Some("other"));
        assert_eq!(refs.folder("workflow", "1"), Some("flows"));
    }

    #[test]
    fn test_missing_group() {
        let refs = References::build(&[], RootFolders::default());
        let err = refs.group_reference(7, "ds_permissions").unwrap_err();
        assert!(err.to_string().contains("retool_permissions.ds_permissions"));
    }
}
