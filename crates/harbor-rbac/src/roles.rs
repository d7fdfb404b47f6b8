//! # Roles
//!
//! A role is a named bundle of permission keys, either a system-wide
//! template (`workspace_id = None`) or scoped to a single workspace. The
//! seeded system roles (`system_admin`, `workspace_owner`,
//! `workspace_member`, `client`) cannot be edited or deleted by tenants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known role keys seeded at system setup.
pub mod keys {
    /// Platform administrator; the one designed authorization bypass.
    pub const SYSTEM_ADMIN: &str = "system_admin";
    /// Full control of a workspace.
    pub const WORKSPACE_OWNER: &str = "workspace_owner";
    /// Regular collaborating member of a workspace.
    pub const WORKSPACE_MEMBER: &str = "workspace_member";
    /// External client with read-only access.
    pub const CLIENT: &str = "client";
}

/// A named bundle of permissions.
///
/// A role with `workspace_id = None` is a global template usable in any
/// workspace context when bound via a membership; a workspace-scoped role
/// applies only within that workspace.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_rbac::Role;
///
/// let workspace_id = Uuid::now_v7();
/// let role = Role::for_workspace(workspace_id, "reviewer", "Reviewer")
///     .with_permission("document.view");
///
/// assert!(role.has_permission("document.view"));
/// assert!(!role.is_global());
/// assert!(!role.is_system_role());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Unique role ID
    pub id: Uuid,

    /// Stable key, e.g. `workspace_owner`
    pub key_name: String,

    /// Human-readable label
    pub label: String,

    /// Workspace this role is scoped to; `None` for global templates
    pub workspace_id: Option<Uuid>,

    /// System roles are seeded at setup and cannot be edited by tenants
    pub is_system_role: bool,

    /// The permission keys this role grants
    #[serde(default)]
    permissions: HashSet<String>,
}

impl Role {
    /// Create a new global (template) role.
    ///
    /// # Arguments
    ///
    /// * `key_name` - The stable role key
    /// * `label` - A human-readable label
    pub fn new(key_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            key_name: key_name.into(),
            label: label.into(),
            workspace_id: None,
            is_system_role: false,
            permissions: HashSet::new(),
        }
    }

    /// Create a new role scoped to a workspace.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace the role applies within
    /// * `key_name` - The stable role key
    /// * `label` - A human-readable label
    pub fn for_workspace(
        workspace_id: Uuid,
        key_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: Some(workspace_id),
            ..Self::new(key_name, label)
        }
    }

    /// Mark this role as a seeded system role.
    pub fn as_system_role(mut self) -> Self {
        self.is_system_role = true;
        self
    }

    /// Add a permission key to this role.
    pub fn with_permission(mut self, key: impl Into<String>) -> Self {
        self.permissions.insert(key.into());
        self
    }

    /// Add multiple permission keys to this role.
    pub fn with_permissions<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Grant a permission key.
    pub fn grant(&mut self, key: impl Into<String>) {
        self.permissions.insert(key.into());
    }

    /// Revoke a permission key.
    ///
    /// # Returns
    ///
    /// `true` if the role previously held the key
    pub fn revoke(&mut self, key: &str) -> bool {
        self.permissions.remove(key)
    }

    /// Check whether this role grants a permission key.
    ///
    /// Exact, case-sensitive key membership; no wildcard matching at this
    /// layer.
    pub fn has_permission(&self, key: &str) -> bool {
        self.permissions.contains(key)
    }

    /// Check whether this is a seeded system role.
    pub fn is_system_role(&self) -> bool {
        self.is_system_role
    }

    /// Check whether this is a global (template) role.
    pub fn is_global(&self) -> bool {
        self.workspace_id.is_none()
    }

    /// Check whether this role carries the system-administrator bypass.
    ///
    /// Only the seeded `system_admin` system role qualifies; a tenant role
    /// that happens to reuse the key does not.
    pub fn is_system_admin(&self) -> bool {
        self.is_system_role && self.key_name == keys::SYSTEM_ADMIN
    }

    /// The permission keys this role grants.
    pub fn permission_keys(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }
}

/// Builders for the seeded system roles.
///
/// These mirror the roles provisioned at system setup. The permission sets
/// reference keys from [`crate::PermissionCatalog::with_defaults`].
pub mod defaults {
    use super::{keys, Role};

    /// The platform administrator role.
    ///
    /// Carries no permission set of its own: the resolver grants it by
    /// bypass, not by key membership.
    pub fn system_admin() -> Role {
        Role::new(keys::SYSTEM_ADMIN, "System Administrator").as_system_role()
    }

    /// Full control of a workspace.
    pub fn workspace_owner() -> Role {
        Role::new(keys::WORKSPACE_OWNER, "Workspace Owner")
            .as_system_role()
            .with_permissions([
                "document.view",
                "document.download",
                "document.upload",
                "document.edit",
                "document.rename",
                "document.move",
                "document.share",
                "document.delete",
                "document.audit",
                "folder.view",
                "folder.create",
                "folder.rename",
                "folder.move",
                "folder.delete",
                "workspace.view",
                "workspace.manage",
                "workspace.audit",
            ])
    }

    /// Regular collaborating member.
    pub fn workspace_member() -> Role {
        Role::new(keys::WORKSPACE_MEMBER, "Workspace Member")
            .as_system_role()
            .with_permissions([
                "document.view",
                "document.download",
                "document.upload",
                "document.edit",
                "document.rename",
                "document.move",
                "folder.view",
                "folder.create",
                "folder.rename",
                "workspace.view",
            ])
    }

    /// External client with read-only access.
    pub fn client() -> Role {
        Role::new(keys::CLIENT, "Client")
            .as_system_role()
            .with_permissions(["document.view", "document.download", "folder.view", "workspace.view"])
    }
}
