//! Workspace membership domain model
//!
//! A membership links a user to a workspace with exactly one role and a
//! lifecycle status. At most one live membership exists per
//! (workspace, user) pair; removal is deletion at the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a workspace membership.
///
/// Only `Active` grants access. Transitions: `Invited → Active` on accept,
/// `Active → Suspended` by admin action, `Suspended → Active` on
/// reinstatement, any → removed (deleted).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// Invited but not yet accepted.
    Invited,
    /// Full member; role permissions are effective.
    Active,
    /// Suspended by an administrator; grants nothing until reinstated.
    Suspended,
}

impl MembershipStatus {
    /// Get the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Invited => "invited",
            MembershipStatus::Active => "active",
            MembershipStatus::Suspended => "suspended",
        }
    }

    /// Parse a status from its string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use harbor_org::MembershipStatus;
    ///
    /// assert_eq!(MembershipStatus::parse("active"), Some(MembershipStatus::Active));
    /// assert_eq!(MembershipStatus::parse("SUSPENDED"), Some(MembershipStatus::Suspended));
    /// assert_eq!(MembershipStatus::parse("banned"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "invited" => Some(MembershipStatus::Invited),
            "active" => Some(MembershipStatus::Active),
            "suspended" => Some(MembershipStatus::Suspended),
            _ => None,
        }
    }

    /// Whether this status makes the bound role's permissions effective.
    pub fn allows_access(&self) -> bool {
        matches!(self, MembershipStatus::Active)
    }
}

/// A user's membership in a workspace.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_org::WorkspaceMembership;
///
/// let workspace_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let role_id = Uuid::now_v7();
///
/// let membership = WorkspaceMembership::new(workspace_id, user_id, role_id);
/// assert!(membership.is_active());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceMembership {
    /// Unique membership ID
    pub id: Uuid,

    /// Workspace ID
    pub workspace_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// The one role bound to this membership
    pub role_id: Uuid,

    /// Lifecycle status
    pub status: MembershipStatus,

    /// When the user joined; `None` while the invite is pending
    pub joined_at: Option<DateTime<Utc>>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<Uuid>,
}

impl WorkspaceMembership {
    /// Create an active membership (direct add).
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace ID
    /// * `user_id` - The user ID
    /// * `role_id` - The role bound to the membership
    pub fn new(workspace_id: Uuid, user_id: Uuid, role_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            user_id,
            role_id,
            status: MembershipStatus::Active,
            joined_at: Some(Utc::now()),
            invited_by: None,
        }
    }

    /// Create a pending membership (invite).
    ///
    /// The membership grants nothing until the invite is accepted.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace ID
    /// * `user_id` - The user ID
    /// * `role_id` - The role the user will hold once active
    pub fn invite(workspace_id: Uuid, user_id: Uuid, role_id: Uuid) -> Self {
        Self {
            status: MembershipStatus::Invited,
            joined_at: None,
            ..Self::new(workspace_id, user_id, role_id)
        }
    }

    /// Set who invited this user.
    pub fn with_inviter(mut self, inviter_id: Uuid) -> Self {
        self.invited_by = Some(inviter_id);
        self
    }

    /// Whether this membership currently grants access.
    ///
    /// The resolver re-reads this on every authorization call, so a status
    /// change is effective immediately for all subsequent checks.
    pub fn status_allows_access(&self) -> bool {
        self.status.allows_access()
    }

    /// Check if the member is active.
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }

    /// Check if the member is invited.
    pub fn is_invited(&self) -> bool {
        self.status == MembershipStatus::Invited
    }

    /// Check if the member is suspended.
    pub fn is_suspended(&self) -> bool {
        self.status == MembershipStatus::Suspended
    }

    /// Accept a pending invite, stamping the join time.
    ///
    /// # Returns
    ///
    /// `true` if the membership was invited and is now active
    pub fn accept_invite(&mut self) -> bool {
        if self.status != MembershipStatus::Invited {
            return false;
        }
        self.status = MembershipStatus::Active;
        self.joined_at = Some(Utc::now());
        true
    }

    /// Suspend the member.
    pub fn suspend(&mut self) {
        self.status = MembershipStatus::Suspended;
    }

    /// Reinstate a suspended member.
    ///
    /// # Returns
    ///
    /// `true` if the membership was suspended and is now active
    pub fn reinstate(&mut self) -> bool {
        if self.status != MembershipStatus::Suspended {
            return false;
        }
        self.status = MembershipStatus::Active;
        true
    }
}
