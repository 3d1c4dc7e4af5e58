use crate::{Error, error::MailError};
use async_trait::async_trait;
use gatehouse_mailer::{
    Mailer, MailerConfig, PasswordResetEmail, VerificationCodeEmail,
};

/// Outbound mail as the account lifecycle sees it: two messages, each
/// carrying a plaintext secret inside a URL.
#[async_trait]
pub trait AuthMailer: Send + Sync {
    async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        verify_url: &str,
    ) -> Result<(), Error>;

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        reset_url: &str,
    ) -> Result<(), Error>;
}

/// Production mailer: renders the gatehouse-mailer templates and hands the
/// message to the configured transport.
pub struct TemplateAuthMailer {
    transport: Box<dyn Mailer>,
    config: MailerConfig,
}

impl TemplateAuthMailer {
    pub fn new(config: MailerConfig) -> Result<Self, Error> {
        let transport = config
            .build_transport()
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        Ok(Self { transport, config })
    }

    pub fn from_env() -> Result<Self, Error> {
        let config = MailerConfig::from_env().map_err(|e| Error::Config(e.to_string()))?;
        Self::new(config)
    }
}

#[async_trait]
impl AuthMailer for TemplateAuthMailer {
    async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        verify_url: &str,
    ) -> Result<(), Error> {
        let email = VerificationCodeEmail::build(
            &self.config.app_name,
            &self.config.sender(),
            to,
            first_name,
            verify_url,
        )
        .map_err(|e| MailError::Delivery(e.to_string()))?;

        self.transport
            .send_email(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        first_name: &str,
        reset_url: &str,
    ) -> Result<(), Error> {
        let email = PasswordResetEmail::build(
            &self.config.app_name,
            &self.config.sender(),
            to,
            first_name,
            reset_url,
        )
        .map_err(|e| MailError::Delivery(e.to_string()))?;

        self.transport
            .send_email(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_mailer::config::TransportConfig;

    fn test_mailer() -> TemplateAuthMailer {
        let dir = std::env::temp_dir().join("gatehouse-mailer-tests");
        TemplateAuthMailer::new(MailerConfig {
            transport: TransportConfig::File { output_dir: dir },
            from_address: "noreply@example.com".to_string(),
            from_name: Some("Gatehouse".to_string()),
            app_name: "Gatehouse".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_verification_email() {
        let mailer = test_mailer();
        let result = mailer
            .send_verification_email(
                "ann@ex.com",
                "Ann",
                "http://localhost:8000/api/auth/verifyemail/code123",
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_password_reset_email() {
        let mailer = test_mailer();
        let result = mailer
            .send_password_reset_email(
                "ann@ex.com",
                "Ann",
                "http://localhost:8000/api/auth/resetpassword/tok456",
            )
            .await;

        assert!(result.is_ok());
    }
}
