use crate::{
    Account, Error,
    account::{DEFAULT_ROLE, NewAccount},
    config::AuthConfig,
    crypto::{generate_secret_code, hash_secret},
    error::{AuthError, StorageError, ValidationError},
    password::{hash_password, verify_password},
    repositories::AccountRepository,
    token::{TokenKind, TokenService},
    validation::{validate_email, validate_password},
};
use chrono::Utc;
use std::sync::Arc;

use super::AuthMailer;

/// Register request payload, constructed field by field at the boundary.
#[derive(Debug, Clone)]
pub struct RegisterAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// The token pair issued at sign-in. The boundary turns these into cookies.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Orchestrates the account lifecycle: registration, verification, sign-in,
/// refresh, and the password-reset flow. Stateless between requests; all
/// durable state lives in the account store, all configuration is injected
/// once at construction.
pub struct AccountService<R: AccountRepository, M: AuthMailer> {
    repository: Arc<R>,
    mailer: Arc<M>,
    tokens: TokenService,
    config: AuthConfig,
}

impl<R: AccountRepository, M: AuthMailer> AccountService<R, M> {
    pub fn new(repository: Arc<R>, mailer: Arc<M>, tokens: TokenService, config: AuthConfig) -> Self {
        Self {
            repository,
            mailer,
            tokens,
            config,
        }
    }

    /// Create an unverified account and email its verification code.
    ///
    /// If the email cannot be delivered the account still exists; there is
    /// no compensating delete. The caller sees the delivery error.
    pub async fn register(&self, input: RegisterAccount) -> Result<Account, Error> {
        validate_email(&input.email)?;

        if input.password != input.password_confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }

        validate_password(&input.password)?;

        let code = generate_secret_code();
        let password_hash = hash_password(&input.password)?;

        let account = self
            .repository
            .create(NewAccount {
                name: input.name,
                email: input.email.to_lowercase(),
                password_hash,
                role: DEFAULT_ROLE.to_string(),
                verification_code: hash_secret(&code),
            })
            .await?;

        tracing::info!(account_id = %account.id, "account registered");

        self.mailer
            .send_verification_email(
                &account.email,
                account.first_name(),
                &self.config.verify_email_url(&code),
            )
            .await?;

        Ok(account)
    }

    /// Regenerate the verification code and re-send the email. The previous
    /// code stops verifying as soon as the new digest is stored.
    pub async fn resend_verification(&self, email: &str) -> Result<(), Error> {
        validate_email(email)?;

        let mut account = self
            .repository
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(StorageError::NotFound)?;

        if account.verified {
            return Err(AuthError::AlreadyVerified.into());
        }

        let code = generate_secret_code();
        account.verification_code = Some(hash_secret(&code));
        account.updated_at = Utc::now();
        let account = self.repository.save(&account).await?;

        self.mailer
            .send_verification_email(
                &account.email,
                account.first_name(),
                &self.config.verify_email_url(&code),
            )
            .await?;

        Ok(())
    }

    /// Mark the matching account verified and clear its stored code, making
    /// the code single-use.
    pub async fn verify_email(&self, code: &str) -> Result<Account, Error> {
        let digest = hash_secret(code);

        let mut account = self
            .repository
            .find_by_verification_code(&digest)
            .await?
            .ok_or(AuthError::CodeNotFound)?;

        account.verified = true;
        account.verification_code = None;
        account.updated_at = Utc::now();

        let account = self.repository.save(&account).await?;
        tracing::info!(account_id = %account.id, "email verified");
        Ok(account)
    }

    /// Authenticate and issue the access/refresh token pair.
    ///
    /// An unknown email and a wrong password both come back as
    /// `InvalidCredentials` so the response never reveals whether the
    /// account exists. Unverified accounts cannot sign in regardless of
    /// password correctness.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(Account, SessionTokens), Error> {
        let account = self
            .repository
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.verified {
            return Err(AuthError::NotVerified.into());
        }

        if !verify_password(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = SessionTokens {
            access_token: self.tokens.issue(TokenKind::Access, &account.id)?,
            refresh_token: self.tokens.issue(TokenKind::Refresh, &account.id)?,
        };

        Ok((account, tokens))
    }

    /// Mint a fresh access token from a valid refresh token. The refresh
    /// token itself is never rotated.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, Error> {
        let subject = self.tokens.validate(TokenKind::Refresh, refresh_token)?;

        let account = self
            .repository
            .find_by_id(&subject)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        self.tokens.issue(TokenKind::Access, &account.id)
    }

    /// Store a fresh reset digest and email the plaintext token.
    pub async fn forgot_password(&self, email: &str) -> Result<(), Error> {
        self.send_reset_token(email).await
    }

    /// Idempotent re-send; each call invalidates the previous reset token.
    pub async fn resend_forgot_password(&self, email: &str) -> Result<(), Error> {
        self.send_reset_token(email).await
    }

    async fn send_reset_token(&self, email: &str) -> Result<(), Error> {
        validate_email(email)?;

        let mut account = self
            .repository
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(StorageError::NotFound)?;

        if !account.verified {
            return Err(AuthError::NotVerified.into());
        }

        let token = generate_secret_code();
        account.password_reset_token = Some(hash_secret(&token));
        account.updated_at = Utc::now();
        let account = self.repository.save(&account).await?;

        self.mailer
            .send_password_reset_email(
                &account.email,
                account.first_name(),
                &self.config.reset_password_url(&token),
            )
            .await?;

        Ok(())
    }

    /// Replace the password of the account holding the matching reset
    /// digest, then clear the digest. The boundary clears the session
    /// cookies afterwards, forcing re-authentication.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<Account, Error> {
        let digest = hash_secret(token);

        let mut account = self
            .repository
            .find_by_reset_token(&digest)
            .await?
            .ok_or(AuthError::ResetTokenNotFound)?;

        account.password_hash = hash_password(new_password)?;
        account.password_reset_token = None;
        account.updated_at = Utc::now();

        let account = self.repository.save(&account).await?;
        tracing::info!(account_id = %account.id, "password reset completed");
        Ok(account)
    }
}
