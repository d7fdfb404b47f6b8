//! Access requests
//!
//! The plain-data input of the resolver. The acting subject is always an
//! explicit argument; there is no ambient current-user context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use harbor_rbac::{Resource, ResourceKind};

/// A request to perform one action on one resource target.
///
/// `resource_id = None` targets the resource kind as a whole (e.g. "may
/// this user create folders in this workspace"); gates apply only when a
/// specific resource is named.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_authz::AccessRequest;
/// use harbor_rbac::{Resource, ResourceKind};
///
/// let user_id = Uuid::now_v7();
/// let workspace_id = Uuid::now_v7();
/// let document_id = Uuid::now_v7();
///
/// // Against one document
/// let request = AccessRequest::for_resource(
///     user_id,
///     "document.delete",
///     Resource::Document(document_id),
///     workspace_id,
/// );
/// assert_eq!(request.resource_id, Some(document_id));
///
/// // Against the kind as a whole
/// let request = AccessRequest::for_kind(user_id, "folder.create", ResourceKind::Folder, workspace_id);
/// assert_eq!(request.resource_id, None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessRequest {
    /// The acting user
    pub subject_id: Uuid,

    /// The requested permission key, e.g. `document.delete`
    pub permission: String,

    /// The targeted resource kind
    pub resource_kind: ResourceKind,

    /// The targeted resource, or `None` for the kind as a whole
    pub resource_id: Option<Uuid>,

    /// The workspace the check is scoped to
    pub workspace_id: Uuid,
}

impl AccessRequest {
    /// Create a request.
    ///
    /// # Arguments
    ///
    /// * `subject_id` - The acting user
    /// * `permission` - The permission key
    /// * `resource_kind` - The targeted resource kind
    /// * `resource_id` - The targeted resource, or `None` for the kind
    /// * `workspace_id` - The workspace scope
    pub fn new(
        subject_id: Uuid,
        permission: impl Into<String>,
        resource_kind: ResourceKind,
        resource_id: Option<Uuid>,
        workspace_id: Uuid,
    ) -> Self {
        Self {
            subject_id,
            permission: permission.into(),
            resource_kind,
            resource_id,
            workspace_id,
        }
    }

    /// Create a request against one concrete resource.
    pub fn for_resource(
        subject_id: Uuid,
        permission: impl Into<String>,
        resource: Resource,
        workspace_id: Uuid,
    ) -> Self {
        Self::new(
            subject_id,
            permission,
            resource.kind(),
            Some(resource.id()),
            workspace_id,
        )
    }

    /// Create a request against a resource kind as a whole.
    pub fn for_kind(
        subject_id: Uuid,
        permission: impl Into<String>,
        resource_kind: ResourceKind,
        workspace_id: Uuid,
    ) -> Self {
        Self::new(subject_id, permission, resource_kind, None, workspace_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_resource() {
        let document_id = Uuid::now_v7();
        let request = AccessRequest::for_resource(
            Uuid::now_v7(),
            "document.edit",
            Resource::Document(document_id),
            Uuid::now_v7(),
        );
        assert_eq!(request.resource_kind, ResourceKind::Document);
        assert_eq!(request.resource_id, Some(document_id));
        assert_eq!(request.permission, "document.edit");
    }

    #[test]
    fn test_for_kind() {
        let request = AccessRequest::for_kind(
            Uuid::now_v7(),
            "folder.create",
            ResourceKind::Folder,
            Uuid::now_v7(),
        );
        assert_eq!(request.resource_id, None);
    }
}
