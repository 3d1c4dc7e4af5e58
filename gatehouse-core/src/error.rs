use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cryptographic error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// Startup-time configuration failure. The one fatal condition: without
    /// signing keys no request can be served.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Covers both an unknown email and a wrong password at sign-in, so the
    /// response never reveals whether the account exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account email is not verified")]
    NotVerified,

    #[error("Account is already verified")]
    AlreadyVerified,

    #[error("Verification code not found")]
    CodeNotFound,

    #[error("Password reset token not found")]
    ResetTokenNotFound,
}

/// Why a token failed validation. The distinction is diagnostic only; the
/// HTTP boundary collapses all three into one unauthorized outcome.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signature did not verify")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token could not be parsed")]
    Malformed,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Record not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("JWT signing failed: {0}")]
    JwtSigning(String),

    #[error("Invalid key material: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email delivery failed: {0}")]
    Delivery(String),
}

impl Error {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    pub fn is_token_error(&self) -> bool {
        matches!(self, Error::Token(_))
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// True for a uniqueness violation reported by the account store.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::Storage(StorageError::Duplicate(_)))
    }
}
