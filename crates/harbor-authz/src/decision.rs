//! Authorization decisions and reason codes
//!
//! A decision is a value, not an error: denial is an expected, frequent
//! outcome of the resolver. Callers translate reasons into their own
//! surface (typically HTTP 403), with resource-state reasons worded
//! distinctly from permission problems.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// No active membership in the workspace.
    NotAMember,

    /// The bound role does not grant the permission.
    PermissionNotGranted,

    /// An explicit ACL entry decided the request (allow or deny).
    AclExplicit,

    /// The bound role grants the permission.
    RoleGrant,

    /// The resource is locked by another subject.
    ResourceLocked,

    /// The resource is under an active legal hold.
    LegalHold,

    /// The resource has been remote-wiped.
    ResourceWiped,

    /// System-administrator bypass.
    SystemAdmin,

    /// Malformed input, e.g. an unknown permission key.
    InvalidRequest,

    /// A backing store failed; treated as deny.
    ResolverUnavailable,
}

impl ReasonCode {
    /// Get the stable code for logs and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::NotAMember => "NOT_A_MEMBER",
            ReasonCode::PermissionNotGranted => "PERMISSION_NOT_GRANTED",
            ReasonCode::AclExplicit => "ACL_EXPLICIT",
            ReasonCode::RoleGrant => "ROLE_GRANT",
            ReasonCode::ResourceLocked => "RESOURCE_LOCKED",
            ReasonCode::LegalHold => "LEGAL_HOLD",
            ReasonCode::ResourceWiped => "RESOURCE_WIPED",
            ReasonCode::SystemAdmin => "SYSTEM_ADMIN",
            ReasonCode::InvalidRequest => "INVALID_REQUEST",
            ReasonCode::ResolverUnavailable => "RESOLVER_UNAVAILABLE",
        }
    }

    /// Whether this reason describes resource state rather than a
    /// permission problem.
    ///
    /// Callers word these denials distinctly so end users understand the
    /// resource-state cause.
    pub fn is_resource_state(&self) -> bool {
        matches!(
            self,
            ReasonCode::ResourceLocked | ReasonCode::LegalHold | ReasonCode::ResourceWiped
        )
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of an authorization check.
///
/// # Examples
///
/// ```
/// use harbor_authz::{Decision, ReasonCode};
///
/// let decision = Decision::deny(ReasonCode::NotAMember);
/// assert!(!decision.is_allowed());
/// assert_eq!(decision.reason.as_str(), "NOT_A_MEMBER");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    /// Whether the action is allowed
    pub allow: bool,

    /// Why
    pub reason: ReasonCode,
}

impl Decision {
    /// An allowing decision.
    pub fn allow(reason: ReasonCode) -> Self {
        Self { allow: true, reason }
    }

    /// A denying decision.
    pub fn deny(reason: ReasonCode) -> Self {
        Self { allow: false, reason }
    }

    /// Whether the action is allowed.
    pub fn is_allowed(&self) -> bool {
        self.allow
    }

    /// Whether the action is denied.
    pub fn is_denied(&self) -> bool {
        !self.allow
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            if self.allow { "Allow" } else { "Deny" },
            self.reason
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Decision::allow(ReasonCode::RoleGrant).is_allowed());
        assert!(Decision::deny(ReasonCode::NotAMember).is_denied());
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(ReasonCode::NotAMember.as_str(), "NOT_A_MEMBER");
        assert_eq!(ReasonCode::PermissionNotGranted.as_str(), "PERMISSION_NOT_GRANTED");
        assert_eq!(ReasonCode::AclExplicit.as_str(), "ACL_EXPLICIT");
        assert_eq!(ReasonCode::RoleGrant.as_str(), "ROLE_GRANT");
        assert_eq!(ReasonCode::ResourceLocked.as_str(), "RESOURCE_LOCKED");
        assert_eq!(ReasonCode::LegalHold.as_str(), "LEGAL_HOLD");
        assert_eq!(ReasonCode::ResourceWiped.as_str(), "RESOURCE_WIPED");
        assert_eq!(ReasonCode::SystemAdmin.as_str(), "SYSTEM_ADMIN");
        assert_eq!(ReasonCode::InvalidRequest.as_str(), "INVALID_REQUEST");
        assert_eq!(ReasonCode::ResolverUnavailable.as_str(), "RESOLVER_UNAVAILABLE");
    }

    #[test]
    fn test_resource_state_reasons() {
        assert!(ReasonCode::ResourceLocked.is_resource_state());
        assert!(ReasonCode::LegalHold.is_resource_state());
        assert!(ReasonCode::ResourceWiped.is_resource_state());
        assert!(!ReasonCode::PermissionNotGranted.is_resource_state());
        assert!(!ReasonCode::AclExplicit.is_resource_state());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Decision::deny(ReasonCode::LegalHold).to_string(),
            "Deny(LEGAL_HOLD)"
        );
        assert_eq!(
            Decision::allow(ReasonCode::SystemAdmin).to_string(),
            "Allow(SYSTEM_ADMIN)"
        );
    }
}
