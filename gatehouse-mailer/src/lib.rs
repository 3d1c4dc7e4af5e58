pub mod config;
pub mod email;
pub mod email_types;
pub mod error;
pub mod mailer;
pub mod templates;
pub mod transports;

pub use config::MailerConfig;
pub use email::{Email, EmailBuilder};
pub use email_types::{PasswordResetEmail, VerificationCodeEmail};
pub use error::MailerError;
pub use mailer::Mailer;
pub use templates::{PasswordResetTemplate, VerificationCodeTemplate};
pub use transports::{FileTransport, SmtpTransport};

pub mod prelude {
    pub use crate::{
        Email, EmailBuilder, FileTransport, Mailer, MailerConfig, MailerError, PasswordResetEmail,
        SmtpTransport, VerificationCodeEmail,
    };
}
