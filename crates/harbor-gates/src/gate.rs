//! Resource gate state
//!
//! Derived, per-resource state consulted before any permission grant. A
//! gate never grants anything; it can only veto.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::retention::RetentionStatus;

/// Lock state of a resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockState {
    /// The subject holding the lock
    pub locked_by: Uuid,

    /// When the lock was taken
    pub locked_at: DateTime<Utc>,
}

/// Resource-intrinsic state that can veto actions independent of
/// permission grants.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_gates::ResourceGate;
///
/// let editor_id = Uuid::now_v7();
/// let gate = ResourceGate::unrestricted().with_lock(editor_id);
///
/// assert!(gate.is_locked());
/// assert_eq!(gate.locked_by(), Some(editor_id));
/// assert!(!gate.is_remote_wiped);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceGate {
    /// Resource has been remote-wiped; only audit reads remain
    pub is_remote_wiped: bool,

    /// Current lock, if any
    pub lock: Option<LockState>,

    /// Resource is covered by at least one legal hold in effect
    pub under_active_legal_hold: bool,

    /// Retention state, if a policy applies to the resource
    pub retention: Option<RetentionStatus>,
}

impl ResourceGate {
    /// A gate with no restrictions — the state of an ordinary resource.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Lock the resource for a subject, stamping the lock time.
    pub fn with_lock(mut self, locked_by: Uuid) -> Self {
        self.lock = Some(LockState {
            locked_by,
            locked_at: Utc::now(),
        });
        self
    }

    /// Mark the resource as remote-wiped.
    pub fn with_remote_wipe(mut self) -> Self {
        self.is_remote_wiped = true;
        self
    }

    /// Set whether the resource is covered by a legal hold in effect.
    pub fn with_legal_hold(mut self, in_effect: bool) -> Self {
        self.under_active_legal_hold = in_effect;
        self
    }

    /// Attach retention state.
    pub fn with_retention(mut self, retention: RetentionStatus) -> Self {
        self.retention = Some(retention);
        self
    }

    /// Whether the resource is locked.
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// The subject holding the lock, if any.
    pub fn locked_by(&self) -> Option<Uuid> {
        self.lock.map(|l| l.locked_by)
    }

    /// Whether a subject is exempt from the lock.
    ///
    /// The locking subject may keep mutating the resource; everyone else
    /// is blocked unless they hold the system-administrator bypass.
    pub fn lock_exempts(&self, subject_id: Uuid) -> bool {
        self.locked_by() == Some(subject_id)
    }

    /// Whether retention has expired for this resource.
    ///
    /// Informational: retention expiry triggers the disposal workflow, it
    /// never denies access by itself.
    pub fn retention_expired(&self) -> bool {
        self.retention.map(|r| r.expired).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retention::RetentionAction;

    #[test]
    fn test_unrestricted_gate() {
        let gate = ResourceGate::unrestricted();
        assert!(!gate.is_remote_wiped);
        assert!(!gate.is_locked());
        assert!(!gate.under_active_legal_hold);
        assert!(!gate.retention_expired());
    }

    #[test]
    fn test_lock_exemption() {
        let locker = Uuid::now_v7();
        let other = Uuid::now_v7();
        let gate = ResourceGate::unrestricted().with_lock(locker);

        assert!(gate.is_locked());
        assert!(gate.lock_exempts(locker));
        assert!(!gate.lock_exempts(other));
    }

    #[test]
    fn test_unlocked_gate_exempts_no_one() {
        let gate = ResourceGate::unrestricted();
        assert!(!gate.lock_exempts(Uuid::now_v7()));
    }

    #[test]
    fn test_retention_state() {
        let gate = ResourceGate::unrestricted().with_retention(RetentionStatus {
            expired: true,
            action: RetentionAction::Delete,
        });
        assert!(gate.retention_expired());
        assert_eq!(gate.retention.unwrap().action, RetentionAction::Delete);
    }
}
