//! End-to-end resolver scenarios against the in-memory store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use harbor_acl::{AclEffect, AclEntry, SubjectRef};
use harbor_authz::{
    AccessRequest, AclStore, AuthorizationResolver, Decision, MemoryAccessStore, ReasonCode,
};
use harbor_gates::{LegalHold, ResourceGate, RetentionAction, RetentionPolicy};
use harbor_org::WorkspaceMembership;
use harbor_rbac::{roles::defaults, PermissionCatalog, Resource, ResourceKind, Role};

struct Fixture {
    store: Arc<MemoryAccessStore>,
    resolver: AuthorizationResolver,
    catalog: PermissionCatalog,
    workspace_id: Uuid,
}

impl Fixture {
    fn new() -> Self {
        let store = Arc::new(MemoryAccessStore::new());
        let catalog = PermissionCatalog::with_defaults();
        let resolver = AuthorizationResolver::new(
            catalog.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        );
        Self {
            store,
            resolver,
            catalog,
            workspace_id: Uuid::now_v7(),
        }
    }

    /// Add a role and an active member holding it; returns (user, role) ids.
    async fn active_member(&self, role: Role) -> (Uuid, Uuid) {
        let role_id = role.id;
        let user_id = Uuid::now_v7();
        self.store.add_role(role).await;
        self.store
            .add_membership(WorkspaceMembership::new(self.workspace_id, user_id, role_id))
            .await;
        (user_id, role_id)
    }

    fn permission_id(&self, key: &str) -> Uuid {
        self.catalog.find(key).expect("seeded permission").id
    }

    async fn authorize(&self, user_id: Uuid, permission: &str, resource: Resource) -> Decision {
        self.resolver
            .authorize(&AccessRequest::for_resource(
                user_id,
                permission,
                resource,
                self.workspace_id,
            ))
            .await
    }
}

/// An "editor" role: may edit documents but not delete them.
fn editor_role() -> Role {
    Role::new("editor", "Editor").with_permissions([
        "document.view",
        "document.edit",
        "folder.view",
    ])
}

#[tokio::test]
async fn editor_gains_delete_through_document_allow_acl() {
    let fx = Fixture::new();
    let (user_id, _) = fx.active_member(editor_role()).await;
    let document = Resource::Document(Uuid::now_v7());

    // Role alone does not grant delete
    let decision = fx.authorize(user_id, "document.delete", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::PermissionNotGranted));

    // Admin grants delete on this exact document
    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::User(user_id),
            ResourceKind::Document,
            Some(document.id()),
            fx.permission_id("document.delete"),
            AclEffect::Allow,
            Uuid::now_v7(),
        ))
        .await;

    let decision = fx.authorize(user_id, "document.delete", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::AclExplicit));

    // The grant is scoped: another document stays denied
    let other = Resource::Document(Uuid::now_v7());
    let decision = fx.authorize(user_id, "document.delete", other).await;
    assert_eq!(decision, Decision::deny(ReasonCode::PermissionNotGranted));
}

#[tokio::test]
async fn resource_specific_deny_beats_role_level_allow() {
    let fx = Fixture::new();
    let (user_id, role_id) = fx.active_member(editor_role()).await;
    let document = Resource::Document(Uuid::now_v7());
    let permission_id = fx.permission_id("document.view");

    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::Role(role_id),
            ResourceKind::Document,
            None,
            permission_id,
            AclEffect::Allow,
            Uuid::now_v7(),
        ))
        .await;
    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::Role(role_id),
            ResourceKind::Document,
            Some(document.id()),
            permission_id,
            AclEffect::Deny,
            Uuid::now_v7(),
        ))
        .await;

    let decision = fx.authorize(user_id, "document.view", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::AclExplicit));

    // The workspace-wide allow still decides other documents
    let other = Resource::Document(Uuid::now_v7());
    let decision = fx.authorize(user_id, "document.view", other).await;
    assert_eq!(decision, Decision::allow(ReasonCode::AclExplicit));
}

#[tokio::test]
async fn suspended_member_is_denied_everything_until_reinstated() {
    let fx = Fixture::new();
    let (user_id, _) = fx.active_member(defaults::workspace_member()).await;
    let folder = Resource::Folder(Uuid::now_v7());

    assert!(fx.authorize(user_id, "folder.view", folder).await.is_allowed());

    fx.store
        .update_membership(fx.workspace_id, user_id, |m| m.suspend())
        .await;

    let decision = fx.authorize(user_id, "folder.view", folder).await;
    assert_eq!(decision, Decision::deny(ReasonCode::NotAMember));

    fx.store
        .update_membership(fx.workspace_id, user_id, |m| {
            m.reinstate();
        })
        .await;

    assert!(fx.authorize(user_id, "folder.view", folder).await.is_allowed());
}

#[tokio::test]
async fn invited_member_holds_no_role_permissions() {
    let fx = Fixture::new();
    let role = defaults::workspace_member();
    let role_id = role.id;
    let user_id = Uuid::now_v7();
    fx.store.add_role(role).await;
    fx.store
        .add_membership(WorkspaceMembership::invite(fx.workspace_id, user_id, role_id))
        .await;

    let decision = fx
        .authorize(user_id, "document.view", Resource::Document(Uuid::now_v7()))
        .await;
    assert_eq!(decision, Decision::deny(ReasonCode::NotAMember));
}

#[tokio::test]
async fn non_member_can_be_granted_access_by_user_acl() {
    let fx = Fixture::new();
    let outsider = Uuid::now_v7();
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::User(outsider),
            ResourceKind::Document,
            Some(document.id()),
            fx.permission_id("document.view"),
            AclEffect::Allow,
            Uuid::now_v7(),
        ))
        .await;

    let decision = fx.authorize(outsider, "document.view", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::AclExplicit));

    // Without the entry, the outsider is simply not a member
    let other = Resource::Document(Uuid::now_v7());
    let decision = fx.authorize(outsider, "document.view", other).await;
    assert_eq!(decision, Decision::deny(ReasonCode::NotAMember));
}

#[tokio::test]
async fn legal_hold_veto_is_absolute() {
    let fx = Fixture::new();
    let (owner_id, _) = fx.active_member(defaults::workspace_owner()).await;
    let document = Resource::Document(Uuid::now_v7());

    // Owner may delete, and an explicit allow entry exists as well
    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::User(owner_id),
            ResourceKind::Document,
            Some(document.id()),
            fx.permission_id("document.delete"),
            AclEffect::Allow,
            Uuid::now_v7(),
        ))
        .await;

    let hold = LegalHold::issue(fx.workspace_id, "Smith v. Acme", Uuid::now_v7());
    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_legal_hold(hold.is_in_effect()),
        )
        .await;

    let decision = fx.authorize(owner_id, "document.delete", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::LegalHold));

    // Non-destructive actions stay governed by normal resolution
    let decision = fx.authorize(owner_id, "document.edit", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::RoleGrant));

    // Releasing the hold lifts the veto
    let mut hold = hold;
    hold.release(Uuid::now_v7());
    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_legal_hold(hold.is_in_effect()),
        )
        .await;
    let decision = fx.authorize(owner_id, "document.delete", document).await;
    assert!(decision.is_allowed());
}

#[tokio::test]
async fn retention_expiry_informs_but_never_denies() {
    let fx = Fixture::new();
    let (owner_id, _) = fx.active_member(defaults::workspace_owner()).await;
    let document = Resource::Document(Uuid::now_v7());

    let policy = RetentionPolicy::new(
        fx.workspace_id,
        "Campaign materials",
        RetentionAction::Delete,
        Uuid::now_v7(),
    )
    .keep_months(6);
    let kept_since = Utc::now() - Duration::days(365);
    let status = policy.status_for(kept_since, Utc::now());
    assert!(status.expired);

    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_retention(status),
        )
        .await;

    // Expired retention is a disposal trigger, not an authorization gate
    let decision = fx.authorize(owner_id, "document.delete", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::RoleGrant));

    // Combined with a legal hold, the hold still vetoes the disposal delete
    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted()
                .with_retention(status)
                .with_legal_hold(true),
        )
        .await;
    let decision = fx.authorize(owner_id, "document.delete", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::LegalHold));
}

#[tokio::test]
async fn system_admin_cannot_delete_under_legal_hold() {
    let fx = Fixture::new();
    let (admin_id, _) = fx.active_member(defaults::system_admin()).await;
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_legal_hold(true),
        )
        .await;

    let decision = fx.authorize(admin_id, "document.delete", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::LegalHold));
}

#[tokio::test]
async fn locking_subject_may_edit_while_others_may_not() {
    let fx = Fixture::new();
    let (locker_id, _) = fx.active_member(editor_role()).await;
    let (other_id, _) = fx.active_member(editor_role()).await;
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_lock(locker_id),
        )
        .await;

    // Both hold document.edit through their roles; only the locker passes
    let decision = fx.authorize(locker_id, "document.edit", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::RoleGrant));

    let decision = fx.authorize(other_id, "document.edit", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::ResourceLocked));

    // Reads on a locked document stay governed by normal resolution
    let decision = fx.authorize(other_id, "document.view", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::RoleGrant));
}

#[tokio::test]
async fn system_admin_may_mutate_locked_resources() {
    let fx = Fixture::new();
    let (locker_id, _) = fx.active_member(editor_role()).await;
    let (admin_id, _) = fx.active_member(defaults::system_admin()).await;
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_lock(locker_id),
        )
        .await;

    let decision = fx.authorize(admin_id, "document.edit", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::SystemAdmin));
}

#[tokio::test]
async fn remote_wipe_blocks_everything_but_audit_reads() {
    let fx = Fixture::new();
    let (owner_id, _) = fx.active_member(defaults::workspace_owner()).await;
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_remote_wipe(),
        )
        .await;

    for permission in ["document.view", "document.edit", "document.delete"] {
        let decision = fx.authorize(owner_id, permission, document).await;
        assert_eq!(decision, Decision::deny(ReasonCode::ResourceWiped), "{permission}");
    }

    let decision = fx.authorize(owner_id, "document.audit", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::RoleGrant));
}

#[tokio::test]
async fn system_admin_bypass_never_overrides_remote_wipe() {
    let fx = Fixture::new();
    let (admin_id, _) = fx.active_member(defaults::system_admin()).await;
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .set_gate(
            ResourceKind::Document,
            document.id(),
            ResourceGate::unrestricted().with_remote_wipe(),
        )
        .await;

    let decision = fx.authorize(admin_id, "document.view", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::ResourceWiped));
}

#[tokio::test]
async fn system_admin_bypasses_role_and_acl_checks() {
    let fx = Fixture::new();
    let (admin_id, _) = fx.active_member(defaults::system_admin()).await;
    let document = Resource::Document(Uuid::now_v7());

    // Even an explicit deny entry does not reach a system admin
    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::User(admin_id),
            ResourceKind::Document,
            Some(document.id()),
            fx.permission_id("document.view"),
            AclEffect::Deny,
            Uuid::now_v7(),
        ))
        .await;

    let decision = fx.authorize(admin_id, "document.view", document).await;
    assert_eq!(decision, Decision::allow(ReasonCode::SystemAdmin));
}

#[tokio::test]
async fn suspended_admin_holds_no_bypass() {
    let fx = Fixture::new();
    let (admin_id, _) = fx.active_member(defaults::system_admin()).await;
    let document = Resource::Document(Uuid::now_v7());

    fx.store
        .update_membership(fx.workspace_id, admin_id, |m| m.suspend())
        .await;

    let decision = fx.authorize(admin_id, "document.view", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::NotAMember));
}

#[tokio::test]
async fn replacing_workspace_acls_drops_previous_grants() {
    let fx = Fixture::new();
    let outsider = Uuid::now_v7();
    let document = Resource::Document(Uuid::now_v7());
    let view_id = fx.permission_id("document.view");

    fx.store
        .add_acl(AclEntry::new(
            fx.workspace_id,
            SubjectRef::User(outsider),
            ResourceKind::Document,
            Some(document.id()),
            view_id,
            AclEffect::Allow,
            Uuid::now_v7(),
        ))
        .await;
    assert!(fx.authorize(outsider, "document.view", document).await.is_allowed());

    // Access rules are rewritten wholesale; the old grant disappears
    let replacement = vec![AclEntry::new(
        fx.workspace_id,
        SubjectRef::User(outsider),
        ResourceKind::Document,
        Some(document.id()),
        fx.permission_id("document.download"),
        AclEffect::Allow,
        Uuid::now_v7(),
    )];
    fx.store
        .replace_for_workspace(fx.workspace_id, replacement)
        .await
        .unwrap();

    let decision = fx.authorize(outsider, "document.view", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::NotAMember));
    assert!(fx
        .authorize(outsider, "document.download", document)
        .await
        .is_allowed());
}

#[tokio::test]
async fn acl_entries_do_not_leak_across_workspaces() {
    let fx = Fixture::new();
    let (user_id, _) = fx.active_member(editor_role()).await;
    let document = Resource::Document(Uuid::now_v7());
    let other_workspace = Uuid::now_v7();

    // A grant in another workspace decides nothing here
    fx.store
        .add_acl(AclEntry::new(
            other_workspace,
            SubjectRef::User(user_id),
            ResourceKind::Document,
            Some(document.id()),
            fx.permission_id("document.delete"),
            AclEffect::Allow,
            Uuid::now_v7(),
        ))
        .await;

    let decision = fx.authorize(user_id, "document.delete", document).await;
    assert_eq!(decision, Decision::deny(ReasonCode::PermissionNotGranted));
}

#[tokio::test]
async fn decision_serializes_with_stable_reason_codes() {
    let decision = Decision::deny(ReasonCode::LegalHold);
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["allow"], false);
    assert_eq!(json["reason"], "legal_hold");
}
