//! Core functionality for the gatehouse authentication service.
//!
//! This crate owns the account state machine (unverified to verified, plus
//! the independent password-reset flow), the RS256 access/refresh token
//! protocol, the one-way hashing of emailed secrets and passwords, and the
//! lifecycle service that ties them to the external account store and
//! mailer.
//!
//! See [`Account`] for the durable record, [`TokenService`] for token
//! issuance and validation, and [`AccountService`] for the lifecycle
//! operations.

pub mod account;
pub mod config;
pub mod crypto;
pub mod error;
pub mod id;
pub mod password;
pub mod repositories;
pub mod services;
pub mod token;
pub mod validation;

pub use account::{Account, AccountId, NewAccount};
pub use config::AuthConfig;
pub use error::Error;
pub use repositories::AccountRepository;
pub use services::{AccountService, AuthMailer, RegisterAccount, SessionTokens, TemplateAuthMailer};
pub use token::{TokenClaims, TokenKind, TokenService};
