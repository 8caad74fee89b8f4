//! Local (development) mail delivery implementation.
//!
//! This file contains the concrete implementation of the `Notifier` trait used
//! during development: messages are written to the process log instead of an
//! actual mail gateway, keeping the delivery observable without any external
//! dependency.

use async_trait::async_trait;

use crate::errors::NotifierError;
use crate::models::Notification;
use crate::Notifier;

pub struct LocalMailService {
    mail_from: String,
    mail_to: String,
}

impl LocalMailService {
    pub fn new(mail_from: impl Into<String>, mail_to: impl Into<String>) -> Self {
        Self {
            mail_from: mail_from.into(),
            mail_to: mail_to.into(),
        }
    }
}

#[async_trait]
impl Notifier for LocalMailService {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifierError> {
        tracing::info!(
            from = %self.mail_from,
            to = %self.mail_to,
            subject = %notification.subject,
            "mail sent with LocalMailService: {}",
            notification.body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_delivery_always_succeeds() {
        let service = LocalMailService::new("noreply@mycompany.com", "admin@mycompany.com");
        let notification = Notification::new("subject", "body");
        assert!(service.notify(&notification).await.is_ok());
    }
}
