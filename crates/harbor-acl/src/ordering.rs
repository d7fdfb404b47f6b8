//! Deterministic conflict resolution for access-control entries
//!
//! Several entries may cover the same request. The decisive entry is the
//! most specific one under a total ordering; insertion order never
//! participates, so resolution is deterministic for identical inputs.

use crate::entry::AclEntry;

/// Specificity rank of an entry, compared lexicographically:
///
/// 1. resource-specific (`resource_id` set) outranks workspace-wide,
/// 2. `user` subject outranks `role` subject at equal specificity,
/// 3. among remaining ties, `deny` outranks `allow` (fail-closed).
///
/// Entries with equal rank necessarily carry the same effect, so any of
/// them yields the same decision; [`decisive`] still breaks the tie by
/// entry id to return a stable witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    resource_specific: bool,
    user_subject: bool,
    deny: bool,
}

impl AclEntry {
    /// The specificity rank used for conflict resolution.
    pub fn specificity(&self) -> Specificity {
        Specificity {
            resource_specific: self.is_resource_specific(),
            user_subject: self.subject.is_user(),
            deny: self.is_deny(),
        }
    }
}

/// Select the decisive entry among matching candidates.
///
/// Returns the entry with the highest specificity rank; exact rank ties are
/// broken by entry id so the same input set always yields the same witness
/// regardless of iteration order.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use harbor_acl::{decisive, AclEffect, AclEntry, SubjectRef};
/// use harbor_rbac::ResourceKind;
///
/// let workspace_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let role_id = Uuid::now_v7();
/// let document_id = Uuid::now_v7();
/// let permission_id = Uuid::now_v7();
/// let admin_id = Uuid::now_v7();
///
/// // Role-wide allow, but a resource-specific deny for this document
/// let role_allow = AclEntry::new(
///     workspace_id, SubjectRef::Role(role_id), ResourceKind::Document,
///     None, permission_id, AclEffect::Allow, admin_id,
/// );
/// let doc_deny = AclEntry::new(
///     workspace_id, SubjectRef::User(user_id), ResourceKind::Document,
///     Some(document_id), permission_id, AclEffect::Deny, admin_id,
/// );
///
/// let winner = decisive([&role_allow, &doc_deny]).unwrap();
/// assert_eq!(winner.effect, AclEffect::Deny);
/// ```
pub fn decisive<'a, I>(entries: I) -> Option<&'a AclEntry>
where
    I: IntoIterator<Item = &'a AclEntry>,
{
    entries
        .into_iter()
        .max_by_key(|entry| (entry.specificity(), entry.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{AclEffect, SubjectRef};
    use harbor_rbac::ResourceKind;
    use uuid::Uuid;

    fn entry(
        subject: SubjectRef,
        resource_id: Option<Uuid>,
        effect: AclEffect,
    ) -> AclEntry {
        AclEntry::new(
            Uuid::now_v7(),
            subject,
            ResourceKind::Document,
            resource_id,
            Uuid::now_v7(),
            effect,
            Uuid::now_v7(),
        )
    }

    #[test]
    fn test_resource_specific_outranks_workspace_wide() {
        let user = Uuid::now_v7();
        let doc = Uuid::now_v7();

        let wide_deny = entry(SubjectRef::User(user), None, AclEffect::Deny);
        let specific_allow = entry(SubjectRef::User(user), Some(doc), AclEffect::Allow);

        let winner = decisive([&wide_deny, &specific_allow]).unwrap();
        assert_eq!(winner.id, specific_allow.id);
        assert!(winner.is_allow());
    }

    #[test]
    fn test_user_outranks_role_at_equal_specificity() {
        let doc = Uuid::now_v7();

        let role_deny = entry(SubjectRef::Role(Uuid::now_v7()), Some(doc), AclEffect::Deny);
        let user_allow = entry(SubjectRef::User(Uuid::now_v7()), Some(doc), AclEffect::Allow);

        let winner = decisive([&role_deny, &user_allow]).unwrap();
        assert_eq!(winner.id, user_allow.id);
        assert!(winner.is_allow());
    }

    #[test]
    fn test_deny_outranks_allow_among_remaining_ties() {
        let user = Uuid::now_v7();
        let doc = Uuid::now_v7();

        let allow = entry(SubjectRef::User(user), Some(doc), AclEffect::Allow);
        let deny = entry(SubjectRef::User(user), Some(doc), AclEffect::Deny);

        let winner = decisive([&allow, &deny]).unwrap();
        assert!(winner.is_deny());

        // Order of presentation does not change the outcome
        let winner = decisive([&deny, &allow]).unwrap();
        assert!(winner.is_deny());
    }

    #[test]
    fn test_ordering_is_independent_of_insertion_order() {
        let user = Uuid::now_v7();
        let role = Uuid::now_v7();
        let doc = Uuid::now_v7();

        let entries = vec![
            entry(SubjectRef::Role(role), None, AclEffect::Allow),
            entry(SubjectRef::User(user), Some(doc), AclEffect::Allow),
            entry(SubjectRef::Role(role), Some(doc), AclEffect::Deny),
            entry(SubjectRef::User(user), None, AclEffect::Deny),
        ];

        let forward = decisive(entries.iter()).unwrap().id;
        let backward = decisive(entries.iter().rev()).unwrap().id;
        assert_eq!(forward, backward);

        // The resource-specific user entry wins
        assert_eq!(forward, entries[1].id);
    }

    #[test]
    fn test_empty_set_has_no_decision() {
        assert!(decisive([]).is_none());
    }
}
