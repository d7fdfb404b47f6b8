//! # Harbor ACL (Access-Control Entries)
//!
//! This crate provides explicit allow/deny overrides on top of role-based
//! permissions: a workspace-scoped entry grants or denies one permission to
//! one subject (a user or a role) for one resource or for every resource of
//! a kind.
//!
//! ## Overview
//!
//! ```text
//! AclEntry = (workspace, subject, resource kind [, resource id], permission, effect)
//!
//! Examples:
//!   (W, user U,  document, D,  document.delete, allow)  - U may delete D
//!   (W, role R,  document, -,  document.view,   deny)   - R may view no document in W
//! ```
//!
//! Multiple entries may exist for the same tuple; uniqueness is not
//! enforced at the data level. Conflicts are resolved by the deterministic
//! specificity ordering in [`ordering`]:
//!
//! 1. resource-specific entries outrank workspace-wide ones,
//! 2. `user` subjects outrank `role` subjects at equal specificity,
//! 3. among remaining ties, `deny` outranks `allow`.
//!
//! Insertion order never participates in the decision.
//!
//! A workspace's entries are replaced wholesale when its access rules are
//! updated; the store contract in `harbor-authz` requires the
//! delete-then-insert to be atomic.

pub mod entry;
pub mod ordering;

// Re-export main types for convenience
pub use entry::{AclEffect, AclEntry, SubjectRef};
pub use ordering::decisive;
