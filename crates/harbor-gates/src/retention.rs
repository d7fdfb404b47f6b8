//! Retention policies
//!
//! A retention policy schedules what happens to documents once their keep
//! period lapses. Expiry informs the disposal workflow; it is never an
//! authorization gate by itself, and retention-driven deletion remains
//! subject to the legal-hold veto.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the disposal workflow does once retention expires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RetentionAction {
    /// Dispose of the document.
    Delete,
    /// Move the document to archive storage.
    Archive,
    /// Queue the document for manual review.
    Review,
}

impl RetentionAction {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionAction::Delete => "delete",
            RetentionAction::Archive => "archive",
            RetentionAction::Review => "review",
        }
    }

    /// Parse an action from its string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use harbor_gates::RetentionAction;
    ///
    /// assert_eq!(RetentionAction::parse("delete"), Some(RetentionAction::Delete));
    /// assert_eq!(RetentionAction::parse("ARCHIVE"), Some(RetentionAction::Archive));
    /// assert_eq!(RetentionAction::parse("shred"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "delete" => Some(RetentionAction::Delete),
            "archive" => Some(RetentionAction::Archive),
            "review" => Some(RetentionAction::Review),
            _ => None,
        }
    }
}

/// Retention state of one resource, as surfaced on its gate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetentionStatus {
    /// The keep period has lapsed
    pub expired: bool,

    /// The configured disposal action
    pub action: RetentionAction,
}

/// A workspace retention policy.
///
/// The keep rule is expressed in months and/or years; the two add up.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use harbor_gates::{RetentionAction, RetentionPolicy};
///
/// let workspace_id = Uuid::now_v7();
/// let admin_id = Uuid::now_v7();
/// let policy = RetentionPolicy::new(workspace_id, "Financial records", RetentionAction::Review, admin_id)
///     .keep_years(7);
///
/// assert_eq!(policy.keep_period_months(), Some(84));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Unique policy ID
    pub id: Uuid,

    /// Workspace the policy belongs to
    pub workspace_id: Uuid,

    /// Policy name
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Months to keep covered documents
    pub keep_months: Option<u32>,

    /// Years to keep covered documents
    pub keep_years: Option<u32>,

    /// What happens once the keep period lapses
    pub action: RetentionAction,

    /// Whether the policy is currently applied
    pub is_active: bool,

    /// Who created the policy
    pub created_by: Uuid,

    /// When the policy was created
    pub created_at: DateTime<Utc>,
}

impl RetentionPolicy {
    /// Create a new active policy with no keep rule yet.
    ///
    /// # Arguments
    ///
    /// * `workspace_id` - The workspace the policy belongs to
    /// * `name` - Policy name
    /// * `action` - The configured disposal action
    /// * `created_by` - The creating user
    pub fn new(
        workspace_id: Uuid,
        name: impl Into<String>,
        action: RetentionAction,
        created_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            workspace_id,
            name: name.into(),
            description: None,
            keep_months: None,
            keep_years: None,
            action,
            is_active: true,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Set the keep period in months.
    pub fn keep_months(mut self, months: u32) -> Self {
        self.keep_months = Some(months);
        self
    }

    /// Set the keep period in years.
    pub fn keep_years(mut self, years: u32) -> Self {
        self.keep_years = Some(years);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The total keep period in months, if a rule is configured.
    pub fn keep_period_months(&self) -> Option<u32> {
        match (self.keep_months, self.keep_years) {
            (None, None) => None,
            (months, years) => {
                Some(months.unwrap_or(0) + years.unwrap_or(0).saturating_mul(12))
            }
        }
    }

    /// When retention expires for a document kept since `kept_since`.
    ///
    /// Returns `None` when the policy has no keep rule (keep forever).
    pub fn expires_at(&self, kept_since: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months = self.keep_period_months()?;
        kept_since.checked_add_months(Months::new(months))
    }

    /// Whether retention has expired for a document kept since
    /// `kept_since`, evaluated at `now`.
    pub fn is_expired(&self, kept_since: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.expires_at(kept_since) {
            Some(expiry) => now >= expiry,
            None => false,
        }
    }

    /// The retention state to surface on a covered resource's gate.
    pub fn status_for(&self, kept_since: DateTime<Utc>, now: DateTime<Utc>) -> RetentionStatus {
        RetentionStatus {
            expired: self.is_expired(kept_since, now),
            action: self.action,
        }
    }
}
