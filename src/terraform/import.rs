//! Resource discovery
//!
//! Remote listings are fetched concurrently, then mapped into
//! [`ImportableResource`] records in a fixed kind order so identifier
//! allocation and output order do not depend on response timing.

use std::collections::HashMap;
use std::future::Future;

use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

use crate::config::api::MAX_CONCURRENT_PERMISSION_REQUESTS;
use crate::config::terraform::{
    PERMISSIONS_SUFFIX, SOURCE_CONTROL_ID, SOURCE_CONTROL_SETTINGS_ID, SSO_ID,
};
use crate::error::{Result, RetoolError};
use crate::retool::{
    Folder, Group, PermissionEntry, RetoolClient, SourceControlConfig, SourceControlSettings,
    Space, SsoConfig,
};

use super::ident::{folder_candidate, group_candidate, space_candidate, Allocators, IdAllocator};
use super::references::RootFolders;
use super::{GroupPermissions, ImportableResource, ResourceKind, ResourcePayload};

/// Everything discovered in one run
#[derive(Debug, Clone, Default)]
pub struct ImportSnapshot {
    /// Resources in emission order
    pub resources: Vec<ImportableResource>,
    pub roots: RootFolders,
}

impl ImportSnapshot {
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.resources.iter().filter(|r| r.kind() == kind).count()
    }
}

/// Non-system folders ordered by id
pub fn folder_resources(folders: &[Folder], ids: &mut IdAllocator) -> Vec<ImportableResource> {
    let mut folders: Vec<&Folder> = folders.iter().filter(|f| !f.is_system_folder).collect();
    folders.sort_by(|a, b| a.id.cmp(&b.id));
    folders
        .into_iter()
        .map(|folder| ImportableResource {
            id: folder.id.clone(),
            terraform_id: ids.allocate(folder_candidate(&folder.folder_type, &folder.name)),
            payload: ResourcePayload::Folder(folder.clone()),
        })
        .collect()
}

/// User-managed groups ordered by numeric id
pub fn group_resources(groups: &[Group], ids: &mut IdAllocator) -> Vec<ImportableResource> {
    let mut groups: Vec<&Group> = groups.iter().filter(|g| !g.is_built_in()).collect();
    groups.sort_by_key(|g| g.id);
    groups
        .into_iter()
        .map(|group| ImportableResource {
            id: group.id.to_string(),
            terraform_id: ids.allocate(group_candidate(&group.name)),
            payload: ResourcePayload::Group(group.clone()),
        })
        .collect()
}

/// One permissions record per group record, named after the group
pub fn permission_resources(
    groups: &[ImportableResource],
    mut entries: HashMap<u64, Vec<PermissionEntry>>,
) -> Vec<ImportableResource> {
    groups
        .iter()
        .filter_map(|resource| match &resource.payload {
            ResourcePayload::Group(group) => Some(ImportableResource {
                id: format!("group|{}", group.id),
                terraform_id: format!("{}{}", resource.terraform_id, PERMISSIONS_SUFFIX),
                payload: ResourcePayload::Permissions(GroupPermissions {
                    group_id: group.id,
                    entries: entries.remove(&group.id).unwrap_or_default(),
                }),
            }),
            _ => None,
        })
        .collect()
}

/// Spaces ordered by id, named after their domain
pub fn space_resources(spaces: &[Space], ids: &mut IdAllocator) -> Vec<ImportableResource> {
    let mut spaces: Vec<&Space> = spaces.iter().collect();
    spaces.sort_by(|a, b| a.id.cmp(&b.id));
    spaces
        .into_iter()
        .map(|space| ImportableResource {
            id: space.id.clone(),
            terraform_id: ids.allocate(space_candidate(&space.domain)),
            payload: ResourcePayload::Space(space.clone()),
        })
        .collect()
}

fn singleton(id: &str, payload: ResourcePayload) -> ImportableResource {
    ImportableResource {
        id: id.to_string(),
        terraform_id: id.to_string(),
        payload,
    }
}

/// Remote listings a run is built from
#[derive(Debug, Clone, Default)]
pub struct RemoteState {
    pub folders: Vec<Folder>,
    pub groups: Vec<Group>,
    pub permissions: HashMap<u64, Vec<PermissionEntry>>,
    pub spaces: Vec<Space>,
    pub source_control: Option<SourceControlConfig>,
    pub source_control_settings: Option<SourceControlSettings>,
    pub sso: Option<SsoConfig>,
}

/// Map remote listings to the ordered resource list
pub fn build_snapshot(state: RemoteState) -> ImportSnapshot {
    let mut allocators = Allocators::default();
    let roots = RootFolders::from_folders(&state.folders);

    let mut resources = folder_resources(&state.folders, &mut allocators.folders);
    let groups = group_resources(&state.groups, &mut allocators.groups);
    let permissions = permission_resources(&groups, state.permissions);
    resources.extend(groups);
    resources.extend(permissions);
    resources.extend(space_resources(&state.spaces, &mut allocators.spaces));

    if let Some(config) = state.source_control {
        resources.push(singleton(
            SOURCE_CONTROL_ID,
            ResourcePayload::SourceControl(config),
        ));
    }
    if let Some(settings) = state.source_control_settings {
        resources.push(singleton(
            SOURCE_CONTROL_SETTINGS_ID,
            ResourcePayload::SourceControlSettings(settings),
        ));
    }
    if let Some(sso) = state.sso {
        resources.push(singleton(SSO_ID, ResourcePayload::Sso(sso)));
    }

    ImportSnapshot { resources, roots }
}

/// Treat an unavailable singleton as not configured; malformed bodies stay fatal
async fn optional<T>(
    fetch: impl Future<Output = Result<Option<T>>>,
    label: &str,
) -> Result<Option<T>> {
    match fetch.await {
        Ok(found) => {
            if found.is_none() {
                debug!("No {} configured", label);
            }
            Ok(found)
        }
        Err(e @ RetoolError::Schema { .. }) => Err(e),
        Err(e) => {
            warn!("Skipping {}: {}", label, e);
            Ok(None)
        }
    }
}

/// Fetch permission entries for every user-managed group, a few groups at a time
async fn fetch_permissions(
    client: &RetoolClient,
    groups: &[Group],
) -> HashMap<u64, Vec<PermissionEntry>> {
    let group_ids: Vec<u64> = groups
        .iter()
        .filter(|g| !g.is_built_in())
        .map(|g| g.id)
        .collect();

    stream::iter(group_ids)
        .map(|group_id| async move { (group_id, client.get_group_permissions(group_id).await) })
        .buffered(MAX_CONCURRENT_PERMISSION_REQUESTS)
        .collect()
        .await
}

/// Discover every importable resource of the organization
pub async fn import_retool_config(client: &RetoolClient) -> Result<ImportSnapshot> {
    info!("Discovering Retool resources at {}", client.base_url());

    let (folders, groups, spaces, source_control, source_control_settings, sso) = tokio::try_join!(
        async { client.get_folders().await.map_err(|e| e.required("folders")) },
        async { client.get_groups().await.map_err(|e| e.required("groups")) },
        async { client.get_spaces().await.map_err(|e| e.required("spaces")) },
        optional(
            client.get_source_control_config(),
            "source control configuration"
        ),
        optional(
            client.get_source_control_settings(),
            "source control settings"
        ),
        optional(client.get_sso_config(), "SSO configuration"),
    )?;

    debug!(
        "Fetched {} folder(s), {} group(s), {} space(s)",
        folders.len(),
        groups.len(),
        spaces.len()
    );

    let permissions = fetch_permissions(client, &groups).await;

    let snapshot = build_snapshot(RemoteState {
        folders,
        groups,
        permissions,
        spaces,
        source_control,
        source_control_settings,
        sso,
    });

    info!("Discovered {} resource(s)", snapshot.resources.len());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retool::source_control::SourceControlProvider;
    use crate::retool::sso::{GoogleSso, SsoKind};

    fn folder(id: &str, name: &str, parent: Option<&str>, system: bool) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            folder_type: "app".to_string(),
            is_system_folder: system,
            parent_folder_id: parent.map(String::from),
        }
    }

    fn group(id: u64, name: &str) -> Group {
        serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
    }

    fn space(id: &str, domain: &str) -> Space {
        Space {
            id: id.to_string(),
            name: domain.to_string(),
            domain: domain.to_string(),
        }
    }

    #[test]
    fn test_folders_sorted_filtered_and_deduplicated() {
        let mut ids = IdAllocator::new();
        let resources = folder_resources(
            &[
                folder("f3", "Reports", Some("root"), false),
                folder("root", "root", None, true),
                folder("f1", "Reports", Some("root"), false),
                folder("f2", "!", Some("root"), false),
            ],
            &mut ids,
        );
        let ids: Vec<(&str, &str)> = resources
            .iter()
            .map(|r| (r.id.as_str(), r.terraform_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("f1", "reports"),
                ("f2", "app_folder_"),
                ("f3", "reports_1")
            ]
        );
    }

    #[test]
    fn test_groups_sorted_numerically_without_built_ins() {
        let mut ids = IdAllocator::new();
        let resources = group_resources(
            &[
                group(10, "Support"),
                group(1, "admin"),
                group(2, "editor"),
                group(3, "viewer"),
                group(4, "All Users"),
                group(9, "Data Science"),
            ],
            &mut ids,
        );
        let ids: Vec<(&str, &str)> = resources
            .iter()
            .map(|r| (r.id.as_str(), r.terraform_id.as_str()))
            .collect();
        assert_eq!(ids, vec![("9", "data_science"), ("10", "support")]);
    }

    #[test]
    fn test_permission_records_follow_groups() {
        let mut ids = IdAllocator::new();
        let groups = group_resources(&[group(7, "Data Science"), group(8, "Ops")], &mut ids);
        let mut entries = HashMap::new();
        entries.insert(
            7,
            vec![PermissionEntry {
                object_type: "app".to_string(),
                id: "a1".to_string(),
                access_level: "use".to_string(),
            }],
        );

        let permissions = permission_resources(&groups, entries);
        assert_eq!(permissions.len(), 2);
        assert_eq!(permissions[0].id, "group|7");
        assert_eq!(permissions[0].terraform_id, "data_science_permissions");
        match &permissions[0].payload {
            ResourcePayload::Permissions(p) => {
                assert_eq!(p.group_id, 7);
                assert_eq!(p.entries.len(), 1);
            }
            other => panic!("Expected permissions, got {:?}", other),
        }
        match &permissions[1].payload {
            ResourcePayload::Permissions(p) => assert!(p.entries.is_empty()),
            other => panic!("Expected permissions, got {:?}", other),
        }
    }

    #[test]
    fn test_spaces_named_by_domain() {
        let mut ids = IdAllocator::new();
        let resources = space_resources(
            &[space("s2", "eu.example.com"), space("s1", "eu.example.com")],
            &mut ids,
        );
        assert_eq!(resources[0].id, "s1");
        assert_eq!(resources[0].terraform_id, "eu_example_com");
        assert_eq!(resources[1].terraform_id, "eu_example_com_1");
    }

    #[test]
    fn test_snapshot_kind_order() {
        let snapshot = build_snapshot(RemoteState {
            folders: vec![
                folder("root1", "root", None, true),
                folder("f1", "Team Apps", Some("root1"), false),
            ],
            groups: vec![group(1, "admin"), group(7, "Data Science")],
            permissions: HashMap::new(),
            spaces: vec![space("s1", "prod.example.com")],
            source_control: Some(SourceControlConfig {
                org: "acme".to_string(),
                repo: "retool".to_string(),
                default_branch: "main".to_string(),
                repo_version: None,
                provider: SourceControlProvider::GitLab(
                    crate::retool::source_control::GitLabConfig {
                        project_id: 1,
                        url: "https://gitlab.com".to_string(),
                    },
                ),
            }),
            source_control_settings: Some(SourceControlSettings::default()),
            sso: Some(SsoConfig {
                disable_email_password_login: false,
                kind: SsoKind::Google(GoogleSso {
                    client_id: "cid".to_string(),
                }),
            }),
        });

        let kinds: Vec<ResourceKind> = snapshot.resources.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Folder,
                ResourceKind::Group,
                ResourceKind::Permissions,
                ResourceKind::Space,
                ResourceKind::SourceControl,
                ResourceKind::SourceControlSettings,
                ResourceKind::Sso,
            ]
        );
        assert_eq!(snapshot.roots.root_of("app"), Some("root1"));
        assert_eq!(snapshot.resources[4].terraform_id, "source_control");
        assert_eq!(snapshot.resources[6].id, "sso");
        assert_eq!(snapshot.count(ResourceKind::Group), 1);
    }

    #[test]
    fn test_unconfigured_singletons_are_skipped() {
        let snapshot = build_snapshot(RemoteState::default());
        assert!(snapshot.resources.is_empty());
        assert!(snapshot.roots.is_empty());
    }
}
