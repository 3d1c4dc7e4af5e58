//! Services orchestrating the account lifecycle.

mod account;
mod mailer;

pub use account::{AccountService, RegisterAccount, SessionTokens};
pub use mailer::{AuthMailer, TemplateAuthMailer};
