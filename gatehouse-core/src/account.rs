//! The durable account record and its identifiers.
//!
//! Accounts are created unverified by registration and move to verified
//! exactly once, when the emailed verification code is presented. The
//! pending verification and reset digests occupy independent fields; each
//! serves its own flow. Accounts are never hard-deleted by this subsystem.
//!
//! | Field                  | Type             | Description                                         |
//! | ---------------------- | ---------------- | --------------------------------------------------- |
//! | `id`                   | `AccountId`      | Opaque identifier assigned by the store.            |
//! | `name`                 | `String`         | Display name.                                       |
//! | `email`                | `String`         | Lowercased, unique.                                 |
//! | `password_hash`        | `String`         | Salted one-way credential, never the raw password.  |
//! | `role`                 | `String`         | Free-form role, defaults to `"user"`.               |
//! | `verified`             | `bool`           | Whether the email address has been proven.          |
//! | `verification_code`    | `Option<String>` | Digest of the pending verification secret.          |
//! | `password_reset_token` | `Option<String>` | Digest of the pending reset secret.                 |

use crate::{
    Error,
    error::ValidationError,
    id::{generate_prefixed_id, validate_prefixed_id},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "user";

/// A unique, stable identifier for an account. Treat the value as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: &str) -> Self {
        AccountId(id.to_string())
    }

    pub fn new_random() -> Self {
        AccountId(generate_prefixed_id("acct"))
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        validate_prefixed_id(&self.0, "acct")
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    pub name: String,

    /// Stored lowercase; uniqueness is enforced by the account store.
    pub email: String,

    /// Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub role: String,

    pub verified: bool,

    /// Digest of the pending verification secret, cleared on verification.
    #[serde(skip_serializing, default)]
    pub verification_code: Option<String>,

    /// Digest of the pending reset secret, cleared on reset completion.
    #[serde(skip_serializing, default)]
    pub password_reset_token: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }

    /// Name used in email greetings: the second word of a multi-part
    /// display name, otherwise the whole name.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').nth(1).unwrap_or(&self.name)
    }
}

/// Input record for account creation. Built explicitly, field by field,
/// from the register request; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub verification_code: String,
}

#[derive(Default)]
pub struct AccountBuilder {
    id: Option<AccountId>,
    name: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
    role: Option<String>,
    verified: bool,
    verification_code: Option<String>,
    password_reset_token: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl AccountBuilder {
    pub fn id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn password_hash(mut self, password_hash: String) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn role(mut self, role: String) -> Self {
        self.role = Some(role);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn verification_code(mut self, verification_code: Option<String>) -> Self {
        self.verification_code = verification_code;
        self
    }

    pub fn password_reset_token(mut self, password_reset_token: Option<String>) -> Self {
        self.password_reset_token = password_reset_token;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> Result<Account, Error> {
        let now = Utc::now();
        Ok(Account {
            id: self.id.unwrap_or_else(AccountId::new_random),
            name: self.name.unwrap_or_default(),
            email: self
                .email
                .ok_or(ValidationError::MissingField("Email is required".to_string()))?
                .to_lowercase(),
            password_hash: self.password_hash.ok_or(ValidationError::MissingField(
                "Password hash is required".to_string(),
            ))?,
            role: self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            verified: self.verified,
            verification_code: self.verification_code,
            password_reset_token: self.password_reset_token,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        })
    }
}
