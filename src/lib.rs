//! Intake client for the UX blueprint webhook: collects a project brief,
//! posts it, and reconciles the reply into research/prompt/wireframe slots.

pub mod config;
pub mod errors;
pub mod export;
pub mod intake;
pub mod log;
pub mod reconcile;
pub mod session;
pub mod webhook;
pub mod wire;

pub use errors::{BlueprintError, USER_FACING_FAILURE};
pub use intake::{IntakeField, IntakeRecord, IntakeState};
pub use reconcile::Reconciler;
pub use session::{RequestState, Session};
pub use wire::{BlueprintResult, WebhookResponse};
