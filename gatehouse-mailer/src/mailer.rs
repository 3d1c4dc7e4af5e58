use crate::{Email, MailerError};
use async_trait::async_trait;

/// Delivery of a single outbound email. No retry is attempted; a failure
/// surfaces immediately to the caller.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, email: Email) -> Result<(), MailerError>;
}

#[async_trait]
impl Mailer for Box<dyn Mailer> {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        self.as_ref().send_email(email).await
    }
}
