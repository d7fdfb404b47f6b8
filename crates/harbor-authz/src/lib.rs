//! # Harbor Authorization Resolver
//!
//! This crate provides the single authorization entry point for the Harbor
//! platform: every call site asks the resolver "may subject S perform
//! action A on resource R in workspace W" and receives an allow/deny
//! decision with a reason. No call site checks permissions on its own.
//!
//! ## Overview
//!
//! The resolver combines, in a fixed precedence order:
//!
//! 1. **Resource gates** (`harbor-gates`): remote wipe, legal hold, lock —
//!    hard vetoes independent of any grant
//! 2. **System-admin bypass**: the one designed shortcut, explicit and
//!    auditable; it never overrides a gate veto
//! 3. **Explicit ACL entries** (`harbor-acl`): allow/deny overrides, most
//!    specific first
//! 4. **Membership state** (`harbor-org`): only active members hold
//!    role-derived permissions
//! 5. **Role permissions** (`harbor-rbac`): the fallback grant
//!
//! Absence of any matching grant is a denial: the resolver fails closed,
//! including on infrastructure failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use harbor_authz::{AccessRequest, AuthorizationResolver, MemoryAccessStore};
//! use harbor_org::WorkspaceMembership;
//! use harbor_rbac::{roles::defaults, PermissionCatalog, Resource};
//!
//! # async fn demo() {
//! let store = Arc::new(MemoryAccessStore::new());
//!
//! let role = defaults::workspace_member();
//! let role_id = role.id;
//! store.add_role(role).await;
//!
//! let workspace_id = Uuid::now_v7();
//! let user_id = Uuid::now_v7();
//! store.add_membership(WorkspaceMembership::new(workspace_id, user_id, role_id)).await;
//!
//! let resolver = AuthorizationResolver::new(
//!     PermissionCatalog::with_defaults(),
//!     store.clone(),
//!     store.clone(),
//!     store.clone(),
//!     store,
//! );
//!
//! let request = AccessRequest::for_resource(
//!     user_id,
//!     "document.edit",
//!     Resource::Document(Uuid::now_v7()),
//!     workspace_id,
//! );
//! let decision = resolver.authorize(&request).await;
//! assert!(decision.is_allowed());
//! # }
//! ```
//!
//! ## Caching
//!
//! A decision may be reused within the request that obtained it, never
//! across requests: membership status, lock state, and ACL sets change
//! between calls, and a stale allow is a security defect. The resolver
//! itself holds no cache and re-reads current state on every call.

pub mod decision;
pub mod memory;
pub mod request;
pub mod resolver;
pub mod stores;

// Re-export main types for convenience
pub use decision::{Decision, ReasonCode};
pub use memory::MemoryAccessStore;
pub use request::AccessRequest;
pub use resolver::{AuthorizationResolver, ResolverError};
pub use stores::{AclStore, MembershipStore, ResourceGateStore, RoleStore, StoreError, StoreResult};
