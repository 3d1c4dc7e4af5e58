//! Axum integration for the gatehouse authentication service.
//!
//! Exposes the account lifecycle operations as routes under `/api/auth` and
//! owns the session-cookie contract: `access_token` and `refresh_token`
//! (http-only) plus the readable `logged_in` flag, set together at sign-in
//! and cleared together at logout and reset-password completion.

pub mod cookies;
pub mod error;
pub mod routes;
pub mod types;

pub use cookies::{CookieConfig, SessionCookies};
pub use error::{ApiError, Result};
pub use routes::{AuthState, create_router};
