//! # Harbor RBAC (Role-Based Access Control)
//!
//! This crate provides the permission catalog and role model for the Harbor
//! document collaboration platform, shared across every Harbor service.
//!
//! ## Overview
//!
//! The harbor-rbac crate handles:
//! - **Permissions**: The catalog of named, dot-namespaced permissions
//! - **Actions**: The operation class a permission key describes
//! - **Resource kinds**: The resource types permissions apply to
//! - **Roles**: Named permission bundles, system-wide or workspace-scoped
//!
//! ## Architecture
//!
//! ```text
//! Permission key = category.action
//!
//! Examples:
//!   "document.view"      - View a document
//!   "document.delete"    - Delete a document
//!   "workspace.manage"   - Full management of a workspace
//! ```
//!
//! A [`Role`] owns a set of permission keys. Role checks are exact,
//! case-sensitive key membership; there is no wildcard matching at this
//! layer. Explicit per-resource overrides live in `harbor-acl`, and the
//! decision engine combining both lives in `harbor-authz`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harbor_rbac::{PermissionCatalog, Role};
//!
//! let catalog = PermissionCatalog::with_defaults();
//! assert!(catalog.exists("document.delete"));
//! assert_eq!(catalog.category("document.delete"), Some("document"));
//!
//! let role = Role::new("reviewer", "Reviewer")
//!     .with_permission("document.view")
//!     .with_permission("document.download");
//! assert!(role.has_permission("document.view"));
//! assert!(!role.has_permission("document.delete"));
//! ```
//!
//! ## Integration with harbor-org
//!
//! This crate works with `harbor-org` memberships:
//! - A workspace membership binds a user to exactly one role
//! - Only an `active` membership makes its role's permissions effective

pub mod actions;
pub mod permissions;
pub mod resources;
pub mod roles;

// Re-export main types for convenience
pub use actions::PermissionAction;
pub use permissions::{Permission, PermissionCatalog};
pub use resources::{Resource, ResourceKind};
pub use roles::{keys, Role};
