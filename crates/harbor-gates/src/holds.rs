//! Legal holds
//!
//! A legal hold is a compliance lock preventing deletion or disposal of
//! covered resources pending litigation or investigation. While a hold is
//! in effect, destructive actions on covered resources are denied
//! unconditionally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A legal hold issued over a set of resources in a workspace.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_gates::LegalHold;
///
/// let workspace_id = Uuid::now_v7();
/// let counsel_id = Uuid::now_v7();
/// let mut hold = LegalHold::issue(workspace_id, "Smith v. Acme", counsel_id)
///     .with_case_number("2026-CV-1042");
///
/// assert!(hold.is_in_effect());
/// hold.release(counsel_id);
/// assert!(!hold.is_in_effect());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalHold {
    /// Unique hold ID
    pub id: Uuid,

    /// Workspace the hold belongs to
    pub workspace_id: Uuid,

    /// Hold name (matter description)
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// External case/matter number
    pub case_number: Option<String>,

    /// Who issued the hold
    pub issued_by: Uuid,

    /// When the hold was issued
    pub issued_at: DateTime<Utc>,

    /// When the hold was released, if it has been
    pub released_at: Option<DateTime<Utc>>,

    /// Who released the hold, if it has been
    pub released_by: Option<Uuid>,

    /// Whether the hold is administratively active
    pub is_active: bool,
}

impl LegalHold {
    /// Issue a new hold.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace the hold belongs to
    /// * `name` - Matter description
    /// * `issued_by` - The issuing user
    pub fn issue(workspace_id: Uuid, name: impl Into<String>, issued_by: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            name: name.into(),
            description: None,
            case_number: None,
            issued_by,
            issued_at: Utc::now(),
            released_at: None,
            released_by: None,
            is_active: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the external case number.
    pub fn with_case_number(mut self, case_number: impl Into<String>) -> Self {
        self.case_number = Some(case_number.into());
        self
    }

    /// Whether the hold is in effect: active and not released.
    ///
    /// Destructive actions on covered resources are vetoed while this
    /// returns `true`.
    pub fn is_in_effect(&self) -> bool {
        self.is_active && self.released_at.is_none()
    }

    /// Release the hold, lifting the veto for resources it covered.
    ///
    /// # Arguments
    ///
    /// * `released_by` - The releasing user
    pub fn release(&mut self, released_by: Uuid) {
        self.is_active = false;
        self.released_at = Some(Utc::now());
        self.released_by = Some(released_by);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hold_is_in_effect() {
        let hold = LegalHold::issue(Uuid::now_v7(), "Smith v. Acme", Uuid::now_v7());
        assert!(hold.is_active);
        assert!(hold.is_in_effect());
        assert!(hold.released_at.is_none());
    }

    #[test]
    fn test_release_lifts_hold() {
        let counsel = Uuid::now_v7();
        let mut hold = LegalHold::issue(Uuid::now_v7(), "Smith v. Acme", counsel);

        hold.release(counsel);
        assert!(!hold.is_in_effect());
        assert_eq!(hold.released_by, Some(counsel));
        assert!(hold.released_at.is_some());
    }

    #[test]
    fn test_inactive_hold_is_not_in_effect() {
        let mut hold = LegalHold::issue(Uuid::now_v7(), "Internal review", Uuid::now_v7());
        hold.is_active = false;
        assert!(!hold.is_in_effect());
    }

    #[test]
    fn test_builders() {
        let hold = LegalHold::issue(Uuid::now_v7(), "Smith v. Acme", Uuid::now_v7())
            .with_description("Preserve all campaign materials")
            .with_case_number("2026-CV-1042");
        assert!(hold.description.is_some());
        assert_eq!(hold.case_number.as_deref(), Some("2026-CV-1042"));
    }
}
