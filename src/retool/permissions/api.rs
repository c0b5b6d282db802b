//! Permission API operations

use log::{debug, warn};

use crate::config::api;
use crate::error::Result;
use crate::retool::RetoolClient;

use super::models::{ListObjectsRequest, PermissionEntry, PermissionObjectType, PermissionSubject};

impl RetoolClient {
    /// List the objects of one type a group has access to
    pub async fn list_group_permissions(
        &self,
        group_id: u64,
        object_type: PermissionObjectType,
    ) -> Result<Vec<PermissionEntry>> {
        let path = format!("/{}", api::PERMISSIONS_LIST_OBJECTS);
        let body = ListObjectsRequest {
            subject: PermissionSubject::group(group_id),
            object_type: object_type.as_str(),
        };
        let error_context = format!("{} permissions for group {}", object_type, group_id);
        self.post_list(&path, &body, &error_context).await
    }

    /// List everything a group has access to, one query per object type
    ///
    /// If any query fails the failure is logged and the group is treated as
    /// having no permission entries at all, so a partial list is never returned.
    pub async fn get_group_permissions(&self, group_id: u64) -> Vec<PermissionEntry> {
        let mut entries = Vec::new();
        for object_type in PermissionObjectType::ALL {
            match self.list_group_permissions(group_id, object_type).await {
                Ok(found) => {
                    debug!(
                        "Group {} has {} {} permission(s)",
                        group_id,
                        found.len(),
                        object_type
                    );
                    entries.extend(found);
                }
                Err(e) => {
                    warn!(
                        "Could not fetch {} permissions for group {}, emitting no permissions for it: {}",
                        object_type, group_id, e
                    );
                    return Vec::new();
                }
            }
        }
        entries
    }
}
