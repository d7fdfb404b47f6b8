//! # Permissions
//!
//! The catalog of named permissions. A permission is identified by its
//! dot-namespaced key (`document.delete`); the category is the segment
//! before the first dot. The catalog is seeded once at system setup and is
//! read-mostly afterwards — roles and ACL entries reference permissions by
//! id and must never outlive them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named permission.
///
/// Permissions are identified by a dot-namespaced key such as
/// `document.view` or `workspace.manage`. Once a permission is referenced
/// by a role or an ACL entry its key is immutable.
///
/// # Example
///
/// ```
/// use harbor_rbac::permissions::Permission;
///
/// let perm = Permission::new("document.delete", "Delete documents");
/// assert_eq!(perm.category(), "document");
/// assert_eq!(perm.action(), "delete");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Permission {
    /// Unique permission ID
    pub id: Uuid,

    /// Dot-namespaced key, e.g. `document.delete`
    pub key_name: String,

    /// Human-readable label
    pub label: String,

    /// Optional longer description
    pub description: Option<String>,
}

impl Permission {
    /// Create a new permission.
    ///
    /// # Arguments
    ///
    /// * `key_name` - The dot-namespaced key
    /// * `label` - A human-readable label
    pub fn new(key_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            key_name: key_name.into(),
            label: label.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The permission category: the key segment before the first `.`.
    ///
    /// Keys without a dot fall into the `general` category.
    pub fn category(&self) -> &str {
        match self.key_name.split_once('.') {
            Some((category, _)) => category,
            None => "general",
        }
    }

    /// The permission action: the key segment after the first `.`.
    ///
    /// Keys without a dot return the whole key.
    pub fn action(&self) -> &str {
        match self.key_name.split_once('.') {
            Some((_, action)) => action,
            None => &self.key_name,
        }
    }
}

/// The set of permissions known to the platform.
///
/// Seeded once at system setup; lookups are by exact, case-sensitive key.
///
/// # Example
///
/// ```
/// use harbor_rbac::permissions::PermissionCatalog;
///
/// let catalog = PermissionCatalog::with_defaults();
/// assert!(catalog.exists("document.view"));
/// assert!(!catalog.exists("Document.View"));
/// assert_eq!(catalog.category("folder.delete"), Some("folder"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionCatalog {
    /// Permissions indexed by key
    permissions: HashMap<String, Permission>,
}

impl PermissionCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            permissions: HashMap::new(),
        }
    }

    /// Create a catalog seeded with the platform permission set.
    ///
    /// These are the permissions the seeded roles reference: document,
    /// folder, and workspace operations.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, label) in [
            ("document.view", "View documents"),
            ("document.download", "Download documents"),
            ("document.upload", "Upload document versions"),
            ("document.edit", "Edit documents"),
            ("document.rename", "Rename documents"),
            ("document.move", "Move documents"),
            ("document.share", "Share documents"),
            ("document.delete", "Delete documents"),
            ("document.audit", "Read document metadata for audit"),
            ("folder.view", "View folders"),
            ("folder.create", "Create folders"),
            ("folder.rename", "Rename folders"),
            ("folder.move", "Move folders"),
            ("folder.delete", "Delete folders"),
            ("workspace.view", "View workspace"),
            ("workspace.manage", "Manage workspace settings and access"),
            ("workspace.audit", "Read workspace audit trail"),
        ] {
            catalog.insert(Permission::new(key, label));
        }
        catalog
    }

    /// Add a permission to the catalog.
    ///
    /// Replaces any existing permission with the same key.
    pub fn insert(&mut self, permission: Permission) {
        self.permissions
            .insert(permission.key_name.clone(), permission);
    }

    /// Check whether a permission key exists.
    pub fn exists(&self, key: &str) -> bool {
        self.permissions.contains_key(key)
    }

    /// Look up a permission by key.
    pub fn find(&self, key: &str) -> Option<&Permission> {
        self.permissions.get(key)
    }

    /// The category of a known permission key.
    ///
    /// Returns `None` for keys not in the catalog.
    pub fn category(&self, key: &str) -> Option<&str> {
        self.find(key).map(|p| p.category())
    }

    /// Number of permissions in the catalog.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Iterate over all permissions.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.values()
    }
}
