use askama::Template;

use crate::{
    Email, MailerError,
    templates::{PasswordResetTemplate, VerificationCodeTemplate},
};

pub const VERIFICATION_SUBJECT: &str = "Your account verification code";
pub const PASSWORD_RESET_SUBJECT: &str = "Your password reset token";

/// The account-verification message sent at registration and on resend.
pub struct VerificationCodeEmail;

impl VerificationCodeEmail {
    pub fn build(
        app_name: &str,
        from: &str,
        to: &str,
        first_name: &str,
        verify_url: &str,
    ) -> Result<Email, MailerError> {
        let html = VerificationCodeTemplate {
            app_name: app_name.to_string(),
            first_name: first_name.to_string(),
            verify_url: verify_url.to_string(),
        }
        .render()?;

        let text = format!(
            "Hello {first_name},\n\n\
             Verify your {app_name} account by opening this link:\n\n{verify_url}\n\n\
             If you didn't create this account, you can ignore this email.\n"
        );

        Email::builder()
            .from(from)
            .to(to)
            .subject(VERIFICATION_SUBJECT)
            .html_body(html)
            .text_body(text)
            .build()
    }
}

/// The password-reset message sent on forgot-password and resend.
pub struct PasswordResetEmail;

impl PasswordResetEmail {
    pub fn build(
        app_name: &str,
        from: &str,
        to: &str,
        first_name: &str,
        reset_url: &str,
    ) -> Result<Email, MailerError> {
        let html = PasswordResetTemplate {
            app_name: app_name.to_string(),
            first_name: first_name.to_string(),
            reset_url: reset_url.to_string(),
        }
        .render()?;

        let text = format!(
            "Hello {first_name},\n\n\
             Reset your {app_name} password by opening this link:\n\n{reset_url}\n\n\
             If you didn't request a reset, you can ignore this email.\n"
        );

        Email::builder()
            .from(from)
            .to(to)
            .subject(PASSWORD_RESET_SUBJECT)
            .html_body(html)
            .text_body(text)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_verification_email() {
        let email = VerificationCodeEmail::build(
            "Gatehouse",
            "noreply@example.com",
            "ann@ex.com",
            "Ann",
            "https://example.com/api/auth/verifyemail/code123",
        )
        .unwrap();

        assert_eq!(email.to, "ann@ex.com");
        assert_eq!(email.subject, VERIFICATION_SUBJECT);
        assert!(email.html_body.unwrap().contains("code123"));
        assert!(email.text_body.unwrap().contains("code123"));
    }

    #[test]
    fn test_build_password_reset_email() {
        let email = PasswordResetEmail::build(
            "Gatehouse",
            "noreply@example.com",
            "lee@ex.com",
            "Lee",
            "https://example.com/api/auth/resetpassword/tok456",
        )
        .unwrap();

        assert_eq!(email.to, "lee@ex.com");
        assert_eq!(email.subject, PASSWORD_RESET_SUBJECT);
        assert!(email.html_body.unwrap().contains("tok456"));
    }
}
