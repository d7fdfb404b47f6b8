//! # Harbor Workspace Membership
//!
//! This crate provides workspace membership for the Harbor platform:
//! the binding of a user to a workspace with exactly one role and a
//! lifecycle status.
//!
//! ## Overview
//!
//! ```text
//! User
//!   └─ WorkspaceMembership ─→ Workspace
//!        ├─ role_id (exactly one role at a time)
//!        └─ status: invited → active → suspended
//! ```
//!
//! Only an `active` membership makes the bound role's permissions
//! effective; `invited` and `suspended` memberships grant nothing. Status
//! changes take effect on the next authorization check — the resolver in
//! `harbor-authz` re-reads membership state on every call.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uuid::Uuid;
//! use harbor_org::{MembershipStatus, WorkspaceMembership};
//!
//! let workspace_id = Uuid::now_v7();
//! let user_id = Uuid::now_v7();
//! let role_id = Uuid::now_v7();
//!
//! let mut membership = WorkspaceMembership::invite(workspace_id, user_id, role_id);
//! assert_eq!(membership.status, MembershipStatus::Invited);
//! assert!(!membership.status_allows_access());
//!
//! membership.accept_invite();
//! assert!(membership.status_allows_access());
//! ```

pub mod membership;

// Re-export main types for convenience
pub use membership::{MembershipStatus, WorkspaceMembership};
