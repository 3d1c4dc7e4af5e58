use crate::{Account, AccountId, Error, account::NewAccount};
use async_trait::async_trait;

/// Data access for account records.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Create a new account and assign its id. A uniqueness violation on
    /// name or email surfaces as `StorageError::Duplicate`.
    async fn create(&self, account: NewAccount) -> Result<Account, Error>;

    /// Find an account by id.
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, Error>;

    /// Find an account by its lowercased email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, Error>;

    /// Find the account whose stored verification digest matches.
    async fn find_by_verification_code(&self, digest: &str) -> Result<Option<Account>, Error>;

    /// Find the account whose stored reset digest matches.
    async fn find_by_reset_token(&self, digest: &str) -> Result<Option<Account>, Error>;

    /// Persist the full record (upsert by id).
    async fn save(&self, account: &Account) -> Result<Account, Error>;
}
