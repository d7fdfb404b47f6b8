//! # Resource Kinds
//!
//! Defines the resource types that permissions and access-control entries
//! apply to. ACL subjects and targets dispatch on explicit type tags rather
//! than dynamic class resolution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resource types that access-control entries can target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A workspace: the top-level collaboration container.
    Workspace,
    /// A folder within a workspace.
    Folder,
    /// A document within a workspace.
    Document,
}

impl ResourceKind {
    /// Get the string representation of the resource kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Workspace => "workspace",
            ResourceKind::Folder => "folder",
            ResourceKind::Document => "document",
        }
    }

    /// Parse a resource kind from its string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use harbor_rbac::resources::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::parse("document"), Some(ResourceKind::Document));
    /// assert_eq!(ResourceKind::parse("FOLDER"), Some(ResourceKind::Folder));
    /// assert_eq!(ResourceKind::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "workspace" => Some(ResourceKind::Workspace),
            "folder" => Some(ResourceKind::Folder),
            "document" => Some(ResourceKind::Document),
            _ => None,
        }
    }

    /// Get all resource kinds.
    pub fn all() -> Vec<Self> {
        vec![
            ResourceKind::Workspace,
            ResourceKind::Folder,
            ResourceKind::Document,
        ]
    }
}

/// A concrete resource instance: kind plus identity.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_rbac::resources::{Resource, ResourceKind};
///
/// let doc = Resource::Document(Uuid::now_v7());
/// assert_eq!(doc.kind(), ResourceKind::Document);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Resource {
    /// A workspace.
    Workspace(Uuid),
    /// A folder.
    Folder(Uuid),
    /// A document.
    Document(Uuid),
}

impl Resource {
    /// The kind of this resource.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Workspace(_) => ResourceKind::Workspace,
            Resource::Folder(_) => ResourceKind::Folder,
            Resource::Document(_) => ResourceKind::Document,
        }
    }

    /// The identity of this resource.
    pub fn id(&self) -> Uuid {
        match self {
            Resource::Workspace(id) | Resource::Folder(id) | Resource::Document(id) => *id,
        }
    }
}
