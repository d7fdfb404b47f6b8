//! Store traits consumed by the resolver
//!
//! The resolver owns no persistence; the surrounding application implements
//! these traits over its data store. Every authorization call re-reads
//! current state through them — suspensions, lock changes, and ACL edits
//! are effective on the next check, so implementations must not cache
//! results across requests.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use harbor_acl::{AclEntry, SubjectRef};
use harbor_gates::ResourceGate;
use harbor_org::WorkspaceMembership;
use harbor_rbac::{ResourceKind, Role};

/// Infrastructure failure from a backing store.
///
/// These are the only errors the resolver propagates; authorization
/// denials are decisions, never errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not reach the backing store
    #[error("store connection failed: {0}")]
    Connection(String),

    /// The backing store rejected or failed the query
    #[error("store query failed: {0}")]
    Query(String),

    /// The backing store did not answer within its configured bound
    #[error("store query timed out")]
    Timeout,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Lookup of workspace memberships.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Find the live membership of a user in a workspace, if any.
    async fn find(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Option<WorkspaceMembership>>;
}

/// Lookup of roles and their permission sets.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Find a role by id, with its permission set loaded.
    async fn find(&self, role_id: Uuid) -> StoreResult<Option<Role>>;
}

/// Lookup and replacement of access-control entries.
#[async_trait]
pub trait AclStore: Send + Sync {
    /// All entries in a workspace that could cover the given subjects and
    /// resource target.
    ///
    /// Implementations may over-return (e.g. ignore the permission); the
    /// resolver re-checks every entry with [`AclEntry::matches`].
    async fn find_matching(
        &self,
        workspace_id: Uuid,
        subjects: &[SubjectRef],
        resource_kind: ResourceKind,
        resource_id: Option<Uuid>,
    ) -> StoreResult<Vec<AclEntry>>;

    /// Replace a workspace's entire entry set.
    ///
    /// The delete-then-insert must be one atomic unit: no concurrent
    /// reader may observe the workspace with zero entries when it should
    /// have its previous set, nor with old and new entries mixed.
    async fn replace_for_workspace(
        &self,
        workspace_id: Uuid,
        entries: Vec<AclEntry>,
    ) -> StoreResult<()>;
}

/// Lookup of resource-gate state.
#[async_trait]
pub trait ResourceGateStore: Send + Sync {
    /// The gate for a concrete resource.
    ///
    /// Unknown resources report an unrestricted gate; existence checks are
    /// the caller's concern, not the resolver's.
    async fn gate_for(
        &self,
        resource_kind: ResourceKind,
        resource_id: Uuid,
    ) -> StoreResult<ResourceGate>;
}
