//! Generic data models for the `adapters` crate.
//!
//! These models define common, abstracted representations of notification
//! payloads that can be used by any notifier implementation, allowing the
//! backend handlers to produce a consistent message format regardless of the
//! configured delivery channel.

/// A single notification message: a short subject line and a free-form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}
