//! In-memory access store
//!
//! This is suitable for single-process applications and testing. For
//! production deployments, implement the store traits over the backing
//! database instead.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use harbor_acl::{AclEntry, SubjectRef};
use harbor_gates::ResourceGate;
use harbor_org::WorkspaceMembership;
use harbor_rbac::{ResourceKind, Role};

use crate::stores::{
    AclStore, MembershipStore, ResourceGateStore, RoleStore, StoreResult,
};

/// In-memory implementation of all four resolver stores.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use harbor_authz::MemoryAccessStore;
/// use harbor_rbac::roles::defaults;
///
/// # async fn demo() {
/// let store = Arc::new(MemoryAccessStore::new());
/// store.add_role(defaults::workspace_member()).await;
/// # }
/// ```
pub struct MemoryAccessStore {
    /// Memberships keyed by (workspace, user)
    memberships: Arc<RwLock<HashMap<(Uuid, Uuid), WorkspaceMembership>>>,
    /// Roles keyed by id
    roles: Arc<RwLock<HashMap<Uuid, Role>>>,
    /// ACL entries keyed by workspace
    acls: Arc<RwLock<HashMap<Uuid, Vec<AclEntry>>>>,
    /// Gates keyed by (kind, resource)
    gates: Arc<RwLock<HashMap<(ResourceKind, Uuid), ResourceGate>>>,
}

impl std::fmt::Debug for MemoryAccessStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryAccessStore").finish()
    }
}

impl MemoryAccessStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            memberships: Arc::new(RwLock::new(HashMap::new())),
            roles: Arc::new(RwLock::new(HashMap::new())),
            acls: Arc::new(RwLock::new(HashMap::new())),
            gates: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace a role.
    pub async fn add_role(&self, role: Role) {
        self.roles.write().await.insert(role.id, role);
    }

    /// Add or replace the membership for its (workspace, user) pair.
    ///
    /// At most one live membership exists per pair; adding replaces.
    pub async fn add_membership(&self, membership: WorkspaceMembership) {
        self.memberships
            .write()
            .await
            .insert((membership.workspace_id, membership.user_id), membership);
    }

    /// Remove a user's membership from a workspace.
    pub async fn remove_membership(&self, workspace_id: Uuid, user_id: Uuid) {
        self.memberships
            .write()
            .await
            .remove(&(workspace_id, user_id));
    }

    /// Mutate a membership in place, e.g. to suspend or reinstate it.
    ///
    /// # Returns
    ///
    /// `true` if a membership existed for the pair
    pub async fn update_membership<F>(&self, workspace_id: Uuid, user_id: Uuid, f: F) -> bool
    where
        F: FnOnce(&mut WorkspaceMembership),
    {
        let mut memberships = self.memberships.write().await;
        match memberships.get_mut(&(workspace_id, user_id)) {
            Some(membership) => {
                f(membership);
                true
            }
            None => false,
        }
    }

    /// Append one ACL entry to its workspace's set.
    pub async fn add_acl(&self, entry: AclEntry) {
        self.acls
            .write()
            .await
            .entry(entry.workspace_id)
            .or_default()
            .push(entry);
    }

    /// Set the gate for a resource.
    pub async fn set_gate(&self, resource_kind: ResourceKind, resource_id: Uuid, gate: ResourceGate) {
        self.gates
            .write()
            .await
            .insert((resource_kind, resource_id), gate);
    }

    /// Clear the gate for a resource, restoring the unrestricted default.
    pub async fn clear_gate(&self, resource_kind: ResourceKind, resource_id: Uuid) {
        self.gates.write().await.remove(&(resource_kind, resource_id));
    }

    /// Number of ACL entries currently held for a workspace.
    pub async fn acl_count(&self, workspace_id: Uuid) -> usize {
        self.acls
            .read()
            .await
            .get(&workspace_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl Default for MemoryAccessStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MembershipStore for MemoryAccessStore {
    async fn find(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Option<WorkspaceMembership>> {
        Ok(self
            .memberships
            .read()
            .await
            .get(&(workspace_id, user_id))
            .cloned())
    }
}

#[async_trait]
impl RoleStore for MemoryAccessStore {
    async fn find(&self, role_id: Uuid) -> StoreResult<Option<Role>> {
        Ok(self.roles.read().await.get(&role_id).cloned())
    }
}

#[async_trait]
impl AclStore for MemoryAccessStore {
    async fn find_matching(
        &self,
        workspace_id: Uuid,
        subjects: &[SubjectRef],
        resource_kind: ResourceKind,
        resource_id: Option<Uuid>,
    ) -> StoreResult<Vec<AclEntry>> {
        let acls = self.acls.read().await;
        let entries = acls
            .get(&workspace_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| {
                        subjects.contains(&entry.subject)
                            && entry.resource_kind == resource_kind
                            && match (entry.resource_id, resource_id) {
                                (None, _) => true,
                                (Some(target), Some(requested)) => target == requested,
                                (Some(_), None) => false,
                            }
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }

    async fn replace_for_workspace(
        &self,
        workspace_id: Uuid,
        entries: Vec<AclEntry>,
    ) -> StoreResult<()> {
        // Delete-then-insert under one write lock: readers observe either
        // the old set or the new set, never an empty or mixed window.
        let mut acls = self.acls.write().await;
        acls.insert(workspace_id, entries);
        Ok(())
    }
}

#[async_trait]
impl ResourceGateStore for MemoryAccessStore {
    async fn gate_for(
        &self,
        resource_kind: ResourceKind,
        resource_id: Uuid,
    ) -> StoreResult<ResourceGate> {
        Ok(self
            .gates
            .read()
            .await
            .get(&(resource_kind, resource_id))
            .cloned()
            .unwrap_or_else(ResourceGate::unrestricted))
    }
}
