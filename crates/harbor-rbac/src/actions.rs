//! # Permission Actions
//!
//! Classifies the action part of a permission key (the segment after the
//! first `.`). The resolver uses this classification to decide which
//! resource-state gates apply to a request: remote wipe blocks everything
//! except audit reads, locks block mutating actions, and legal holds block
//! destructive actions.

use serde::{Deserialize, Serialize};

/// The operation class a permission key describes.
///
/// Actions represent different levels of access:
/// - **View / Download / List / Audit**: read-only operations
/// - **Create / Upload / Edit / Rename / Move / Share / Manage**: mutating
///   operations
/// - **Delete / Dispose**: destructive operations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    /// View resource details and content.
    View,

    /// Download/export resource content.
    Download,

    /// Query/browse multiple resources.
    List,

    /// Read resource metadata for audit purposes.
    ///
    /// The one action class still permitted on a remote-wiped resource.
    Audit,

    /// Create new resource instances.
    Create,

    /// Upload content into a resource.
    Upload,

    /// Modify existing resource data.
    Edit,

    /// Rename a resource.
    Rename,

    /// Move a resource to another parent.
    Move,

    /// Share a resource with other users or roles.
    Share,

    /// Administer resource settings and access.
    Manage,

    /// Permanently remove a resource.
    Delete,

    /// Retention-driven disposal of a resource.
    Dispose,
}

impl PermissionAction {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::View => "view",
            PermissionAction::Download => "download",
            PermissionAction::List => "list",
            PermissionAction::Audit => "audit",
            PermissionAction::Create => "create",
            PermissionAction::Upload => "upload",
            PermissionAction::Edit => "edit",
            PermissionAction::Rename => "rename",
            PermissionAction::Move => "move",
            PermissionAction::Share => "share",
            PermissionAction::Manage => "manage",
            PermissionAction::Delete => "delete",
            PermissionAction::Dispose => "dispose",
        }
    }

    /// Parse an action from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(PermissionAction)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use harbor_rbac::actions::PermissionAction;
    ///
    /// assert_eq!(PermissionAction::parse("view"), Some(PermissionAction::View));
    /// assert_eq!(PermissionAction::parse("read"), Some(PermissionAction::View)); // Alias
    /// assert_eq!(PermissionAction::parse("destroy"), Some(PermissionAction::Delete)); // Alias
    /// assert_eq!(PermissionAction::parse("frobnicate"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "view" | "read" | "get" => Some(PermissionAction::View),
            "download" | "export" => Some(PermissionAction::Download),
            "list" | "browse" | "search" => Some(PermissionAction::List),
            "audit" => Some(PermissionAction::Audit),
            "create" | "add" | "new" => Some(PermissionAction::Create),
            "upload" | "import" => Some(PermissionAction::Upload),
            "edit" | "update" | "write" | "modify" => Some(PermissionAction::Edit),
            "rename" => Some(PermissionAction::Rename),
            "move" => Some(PermissionAction::Move),
            "share" => Some(PermissionAction::Share),
            "manage" | "admin" | "administer" => Some(PermissionAction::Manage),
            "delete" | "remove" | "destroy" => Some(PermissionAction::Delete),
            "dispose" | "disposal" => Some(PermissionAction::Dispose),
            _ => None,
        }
    }

    /// Classify the action part of a dot-namespaced permission key.
    ///
    /// The action is the segment after the first `.`. Keys with no dot or
    /// with an unrecognized suffix return `None`; callers treat unknown
    /// actions as mutating and non-audit so that gates stay fail-closed.
    ///
    /// # Example
    ///
    /// ```
    /// use harbor_rbac::actions::PermissionAction;
    ///
    /// assert_eq!(PermissionAction::of_key("document.delete"), Some(PermissionAction::Delete));
    /// assert_eq!(PermissionAction::of_key("document.custom_suffix"), None);
    /// assert_eq!(PermissionAction::of_key("nodot"), None);
    /// ```
    pub fn of_key(key: &str) -> Option<Self> {
        let (_, action) = key.split_once('.')?;
        Self::parse(action)
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            PermissionAction::View,
            PermissionAction::Download,
            PermissionAction::List,
            PermissionAction::Audit,
            PermissionAction::Create,
            PermissionAction::Upload,
            PermissionAction::Edit,
            PermissionAction::Rename,
            PermissionAction::Move,
            PermissionAction::Share,
            PermissionAction::Manage,
            PermissionAction::Delete,
            PermissionAction::Dispose,
        ]
    }

    /// Check if this is a read-only action.
    ///
    /// Read-only actions never modify resources and are not blocked by
    /// resource locks.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            PermissionAction::View
                | PermissionAction::Download
                | PermissionAction::List
                | PermissionAction::Audit
        )
    }

    /// Check if this is a mutating action.
    ///
    /// Mutating actions are blocked on a locked resource for everyone but
    /// the locking subject and system administrators.
    pub fn is_mutating(&self) -> bool {
        !self.is_read_only()
    }

    /// Check if this is a destructive action.
    ///
    /// Destructive actions are blocked unconditionally while a resource is
    /// under an active legal hold.
    pub fn is_destructive(&self) -> bool {
        matches!(self, PermissionAction::Delete | PermissionAction::Dispose)
    }

    /// Check if this is an audit read.
    ///
    /// Audit reads are the only operations permitted on a remote-wiped
    /// resource.
    pub fn is_audit(&self) -> bool {
        matches!(self, PermissionAction::Audit)
    }
}
