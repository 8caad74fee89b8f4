//! Core `adapters` crate for abstracting outbound notification delivery.
//!
//! This crate defines the `Notifier` trait, which outlines generic functionality
//! for delivering operational notifications (e.g., entity-deletion mails), and
//! provides a central point for accessing concrete implementations
//! (local console mail, cloud mail).

pub mod cloud;
pub mod errors;
pub mod local;
pub mod models;

// Re-exports for convenience
pub use cloud::CloudMailService;
pub use errors::NotifierError;
pub use local::LocalMailService;
pub use models::Notification;

use async_trait::async_trait;

/// Delivery seam for fire-and-forget notifications.
///
/// Implementations must not fail the caller's request path; callers are
/// expected to spawn delivery onto a background task and log failures.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifierError>;
}
