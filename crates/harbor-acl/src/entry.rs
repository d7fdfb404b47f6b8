//! Access-control entry domain model
//!
//! An entry binds a subject (user or role) to a permission on a resource
//! target within one workspace, with an allow or deny effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use harbor_rbac::ResourceKind;

/// The effect of an access-control entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AclEffect {
    /// Grant the permission.
    Allow,
    /// Withhold the permission.
    Deny,
}

impl AclEffect {
    /// Get the string representation of the effect.
    pub fn as_str(&self) -> &'static str {
        match self {
            AclEffect::Allow => "allow",
            AclEffect::Deny => "deny",
        }
    }

    /// Parse an effect from its string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use harbor_acl::AclEffect;
    ///
    /// assert_eq!(AclEffect::parse("allow"), Some(AclEffect::Allow));
    /// assert_eq!(AclEffect::parse("DENY"), Some(AclEffect::Deny));
    /// assert_eq!(AclEffect::parse("maybe"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "allow" => Some(AclEffect::Allow),
            "deny" => Some(AclEffect::Deny),
            _ => None,
        }
    }
}

/// The subject of an access-control entry: a user directly, or every
/// holder of a role.
///
/// Resolved by explicit type-tag dispatch; there is no ambient subject.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "subject_type", content = "subject_id", rename_all = "snake_case")]
pub enum SubjectRef {
    /// A specific user.
    User(Uuid),
    /// Every subject currently bound to the role.
    Role(Uuid),
}

impl SubjectRef {
    /// The subject-type tag (`user` or `role`).
    pub fn kind_str(&self) -> &'static str {
        match self {
            SubjectRef::User(_) => "user",
            SubjectRef::Role(_) => "role",
        }
    }

    /// The subject identity.
    pub fn id(&self) -> Uuid {
        match self {
            SubjectRef::User(id) | SubjectRef::Role(id) => *id,
        }
    }

    /// Whether this names a user directly.
    pub fn is_user(&self) -> bool {
        matches!(self, SubjectRef::User(_))
    }
}

/// An explicit allow/deny override for one subject, permission, and
/// resource target within a workspace.
///
/// `resource_id = None` targets every resource of the kind in the
/// workspace. Uniqueness is not enforced: several entries may cover the
/// same request, and [`crate::ordering::decisive`] picks the winner.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_acl::{AclEffect, AclEntry, SubjectRef};
/// use harbor_rbac::ResourceKind;
///
/// let workspace_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let document_id = Uuid::now_v7();
/// let permission_id = Uuid::now_v7();
/// let admin_id = Uuid::now_v7();
///
/// let entry = AclEntry::new(
///     workspace_id,
///     SubjectRef::User(user_id),
///     ResourceKind::Document,
///     Some(document_id),
///     permission_id,
///     AclEffect::Allow,
///     admin_id,
/// );
/// assert!(entry.is_resource_specific());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AclEntry {
    /// Unique entry ID
    pub id: Uuid,

    /// Workspace this entry is scoped to
    pub workspace_id: Uuid,

    /// Who the entry applies to
    #[serde(flatten)]
    pub subject: SubjectRef,

    /// The resource kind the entry targets
    pub resource_kind: ResourceKind,

    /// A specific resource, or `None` for every resource of the kind
    pub resource_id: Option<Uuid>,

    /// The permission being allowed or denied
    pub permission_id: Uuid,

    /// Allow or deny
    pub effect: AclEffect,

    /// Who created the entry
    pub created_by: Uuid,

    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl AclEntry {
    /// Create a new entry.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace the entry is scoped to
    /// * `subject` - The user or role it applies to
    /// * `resource_kind` - The targeted resource kind
    /// * `resource_id` - A specific resource, or `None` for the whole kind
    /// * `permission_id` - The permission being allowed or denied
    /// * `effect` - Allow or deny
    /// * `created_by` - The administrator creating the entry
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        workspace_id: Uuid,
        subject: SubjectRef,
        resource_kind: ResourceKind,
        resource_id: Option<Uuid>,
        permission_id: Uuid,
        effect: AclEffect,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            subject,
            resource_kind,
            resource_id,
            permission_id,
            effect,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Whether this entry targets one specific resource.
    pub fn is_resource_specific(&self) -> bool {
        self.resource_id.is_some()
    }

    /// Whether this entry allows the permission.
    pub fn is_allow(&self) -> bool {
        self.effect == AclEffect::Allow
    }

    /// Whether this entry denies the permission.
    pub fn is_deny(&self) -> bool {
        self.effect == AclEffect::Deny
    }

    /// Check whether this entry covers a request.
    ///
    /// The entry matches when its subject is among the caller's identities
    /// (the user directly, or the user's current role), the resource kind
    /// equals the target kind, the entry is workspace-wide or names the
    /// target resource, and the permission matches.
    ///
    /// A kind-wide request (`resource_id = None`) is only covered by
    /// kind-wide entries: an instance-specific entry can never decide a
    /// request that names no instance.
    ///
    /// # Arguments
    ///
    /// * `subjects` - The caller's identities (user id, plus role id if any)
    /// * `resource_kind` - The targeted resource kind
    /// * `resource_id` - The targeted resource, if the request names one
    /// * `permission_id` - The requested permission
    pub fn matches(
        &self,
        subjects: &[SubjectRef],
        resource_kind: ResourceKind,
        resource_id: Option<Uuid>,
        permission_id: Uuid,
    ) -> bool {
        if self.permission_id != permission_id || self.resource_kind != resource_kind {
            return false;
        }
        if !subjects.contains(&self.subject) {
            return false;
        }
        match (self.resource_id, resource_id) {
            (None, _) => true,
            (Some(entry_target), Some(request_target)) => entry_target == request_target,
            (Some(_), None) => false,
        }
    }
}
