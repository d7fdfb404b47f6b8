//! # Harbor Resource Gates
//!
//! Resource-intrinsic state that can veto actions independent of any
//! permission grant: lock state, remote wipe, legal holds, and retention
//! policies.
//!
//! ## Overview
//!
//! A [`ResourceGate`] is derived state, composed from document/folder
//! attributes and active compliance records:
//!
//! - **Remote wipe** vetoes everything except audit reads.
//! - **Lock** restricts mutating actions to the locking subject and system
//!   administrators; reads stay governed by normal resolution.
//! - **Legal hold** vetoes destructive actions unconditionally — no role or
//!   ACL allow overrides it.
//! - **Retention expiry** never denies by itself; it triggers the disposal
//!   workflow, whose delete is then subject to the legal-hold veto.
//!
//! The precedence of these vetoes against role and ACL grants is owned by
//! the resolver in `harbor-authz`.

pub mod gate;
pub mod holds;
pub mod retention;

// Re-export main types for convenience
pub use gate::{LockState, ResourceGate};
pub use holds::LegalHold;
pub use retention::{RetentionAction, RetentionPolicy, RetentionStatus};
