//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while handing a notification to a
//! delivery channel, providing a unified error handling mechanism for all
//! notifier implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}
