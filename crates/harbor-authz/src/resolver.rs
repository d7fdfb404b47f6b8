//! The authorization resolver
//!
//! The single decision engine every Harbor call site goes through. Given
//! (subject, permission, resource, workspace), it combines resource-gate
//! vetoes, explicit ACL entries, membership state, and role permissions in
//! a fixed precedence order and returns an allow/deny decision with a
//! reason.
//!
//! The resolver is a pure read path: it performs lookups and returns a
//! value, never mutating state, so one instance is safe for concurrent use
//! from any number of request handlers. Decisions must not be cached
//! across requests — membership status, lock state, and ACL sets all
//! change out from under a cache, and a stale allow is a security defect.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn};
use uuid::Uuid;

use harbor_acl::{decisive, SubjectRef};
use harbor_rbac::{PermissionAction, PermissionCatalog, Role};

use crate::decision::{Decision, ReasonCode};
use crate::request::AccessRequest;
use crate::stores::{AclStore, MembershipStore, ResourceGateStore, RoleStore, StoreError};

/// Infrastructure failure surfaced by [`AuthorizationResolver::try_authorize`].
#[derive(Debug, Error)]
pub enum ResolverError {
    /// A backing store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The decision engine combining roles, ACL entries, membership state,
/// and resource gates.
///
/// Resolution order (first decisive step wins; default deny):
///
/// 1. Unknown permission key → `Deny(INVALID_REQUEST)`.
/// 2. Resource-gate hard vetoes: remote wipe (everything but audit reads),
///    legal hold (destructive actions, system admins included), lock
///    (mutating actions by anyone but the locker or a system admin).
/// 3. System-administrator bypass → `Allow(SYSTEM_ADMIN)`.
/// 4. Explicit ACL entries, most specific first → `Allow/Deny(ACL_EXPLICIT)`.
/// 5. No active membership → `Deny(NOT_A_MEMBER)`.
/// 6. Role permission set → `Allow(ROLE_GRANT)` or
///    `Deny(PERMISSION_NOT_GRANTED)`.
pub struct AuthorizationResolver {
    catalog: PermissionCatalog,
    memberships: Arc<dyn MembershipStore>,
    roles: Arc<dyn RoleStore>,
    acls: Arc<dyn AclStore>,
    gates: Arc<dyn ResourceGateStore>,
}

impl std::fmt::Debug for AuthorizationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationResolver")
            .field("catalog_len", &self.catalog.len())
            .finish()
    }
}

impl AuthorizationResolver {
    /// Create a resolver over the given catalog and stores.
    pub fn new(
        catalog: PermissionCatalog,
        memberships: Arc<dyn MembershipStore>,
        roles: Arc<dyn RoleStore>,
        acls: Arc<dyn AclStore>,
        gates: Arc<dyn ResourceGateStore>,
    ) -> Self {
        Self {
            catalog,
            memberships,
            roles,
            acls,
            gates,
        }
    }

    /// Authorize a request, failing closed on infrastructure failure.
    ///
    /// Store failures are logged and returned as
    /// `Deny(RESOLVER_UNAVAILABLE)`; this method never fails open and
    /// never panics past the boundary. Callers that need the underlying
    /// store error can use [`try_authorize`](Self::try_authorize).
    pub async fn authorize(&self, request: &AccessRequest) -> Decision {
        match self.try_authorize(request).await {
            Ok(decision) => decision,
            Err(err) => {
                error!(
                    subject_id = %request.subject_id,
                    permission = %request.permission,
                    workspace_id = %request.workspace_id,
                    error = %err,
                    "authorization store failure, denying"
                );
                Decision::deny(ReasonCode::ResolverUnavailable)
            }
        }
    }

    /// Authorize a request, propagating infrastructure failures.
    ///
    /// The caller must treat `Err` as deny.
    pub async fn try_authorize(
        &self,
        request: &AccessRequest,
    ) -> Result<Decision, ResolverError> {
        let decision = self.resolve(request).await?;
        debug!(
            subject_id = %request.subject_id,
            permission = %request.permission,
            resource_kind = request.resource_kind.as_str(),
            resource_id = ?request.resource_id,
            workspace_id = %request.workspace_id,
            decision = %decision,
            "authorization resolved"
        );
        Ok(decision)
    }

    async fn resolve(&self, request: &AccessRequest) -> Result<Decision, ResolverError> {
        // Step 1: the permission key must exist. A misconfigured caller
        // fails closed instead of crashing its workflow.
        let permission = match self.catalog.find(&request.permission) {
            Some(permission) => permission,
            None => {
                warn!(
                    permission = %request.permission,
                    subject_id = %request.subject_id,
                    "unknown permission key in authorization request"
                );
                return Ok(Decision::deny(ReasonCode::InvalidRequest));
            }
        };

        // Unknown action suffixes classify as mutating, non-audit,
        // non-destructive: wipe and lock stay closed, the legal-hold veto
        // stays scoped to destruction.
        let action = PermissionAction::of_key(&request.permission);
        let is_audit = action.map(|a| a.is_audit()).unwrap_or(false);
        let is_mutating = action.map(|a| a.is_mutating()).unwrap_or(true);
        let is_destructive = action.map(|a| a.is_destructive()).unwrap_or(false);

        // Load the subject's membership and bound role up front; the gate
        // step needs to know whether the subject is a system admin.
        let membership = self
            .memberships
            .find(request.workspace_id, request.subject_id)
            .await?;
        let active_membership = membership.filter(|m| m.status_allows_access());
        let role = match &active_membership {
            Some(m) => self.roles.find(m.role_id).await?,
            None => None,
        };
        let is_system_admin = role.as_ref().map(Role::is_system_admin).unwrap_or(false);

        // Step 2: resource-gate hard vetoes, when a concrete resource is
        // named. Wipe first, then hold, then lock.
        if let Some(resource_id) = request.resource_id {
            let gate = self.gates.gate_for(request.resource_kind, resource_id).await?;

            if gate.is_remote_wiped && !is_audit {
                return Ok(Decision::deny(ReasonCode::ResourceWiped));
            }
            if gate.under_active_legal_hold && is_destructive {
                // Absolute: not overridden by any role, ACL allow, or the
                // system-admin bypass.
                return Ok(Decision::deny(ReasonCode::LegalHold));
            }
            if gate.is_locked()
                && is_mutating
                && !gate.lock_exempts(request.subject_id)
                && !is_system_admin
            {
                return Ok(Decision::deny(ReasonCode::ResourceLocked));
            }
        }

        // Step 3: the one designed bypass, explicit and auditable.
        if is_system_admin {
            return Ok(Decision::allow(ReasonCode::SystemAdmin));
        }

        // Step 4: explicit ACL entries, matched for the user directly and
        // for the bound role, most specific first.
        let mut subjects = vec![SubjectRef::User(request.subject_id)];
        if let Some(role) = &role {
            subjects.push(SubjectRef::Role(role.id));
        }
        let entries = self
            .acls
            .find_matching(
                request.workspace_id,
                &subjects,
                request.resource_kind,
                request.resource_id,
            )
            .await?;
        let matching = entries.iter().filter(|entry| {
            entry.workspace_id == request.workspace_id
                && entry.matches(
                    &subjects,
                    request.resource_kind,
                    request.resource_id,
                    permission.id,
                )
        });
        if let Some(entry) = decisive(matching) {
            return Ok(Decision {
                allow: entry.is_allow(),
                reason: ReasonCode::AclExplicit,
            });
        }

        // Step 5: membership gating.
        let Some(membership) = active_membership else {
            return Ok(Decision::deny(ReasonCode::NotAMember));
        };

        // Step 6: role-permission fallback.
        let granted = role
            .as_ref()
            .map(|r| r.has_permission(&request.permission))
            .unwrap_or(false);
        if granted {
            Ok(Decision::allow(ReasonCode::RoleGrant))
        } else {
            debug!(
                membership_id = %membership.id,
                permission = %request.permission,
                "role does not grant permission"
            );
            Ok(Decision::deny(ReasonCode::PermissionNotGranted))
        }
    }
}
