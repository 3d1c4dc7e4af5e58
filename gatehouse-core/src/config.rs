//! Process configuration, loaded once at startup and injected into the
//! services that need it. Nothing here is re-read per request.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use chrono::Duration;

use crate::{
    Error,
    token::{TokenKeyPair, TokenService},
};

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Public base URL used to build verification and reset links.
    pub base_url: String,
    /// Cookie domain.
    pub domain: String,

    /// RS256 key material, PEM bytes (env carries them base64-encoded).
    pub access_token_private_key: Vec<u8>,
    pub access_token_public_key: Vec<u8>,
    pub refresh_token_private_key: Vec<u8>,
    pub refresh_token_public_key: Vec<u8>,

    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,

    /// Cookie max-ages, in minutes.
    pub access_cookie_max_age: i64,
    pub refresh_cookie_max_age: i64,
}

impl AuthConfig {
    /// Read the full configuration from the environment. Any missing or
    /// malformed value is an error; callers treat that as fatal.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            base_url: require_env("BASE_URL")?,
            domain: require_env("DOMAIN")?,
            access_token_private_key: decode_key_env("ACCESS_TOKEN_PRIVATE_KEY")?,
            access_token_public_key: decode_key_env("ACCESS_TOKEN_PUBLIC_KEY")?,
            refresh_token_private_key: decode_key_env("REFRESH_TOKEN_PRIVATE_KEY")?,
            refresh_token_public_key: decode_key_env("REFRESH_TOKEN_PUBLIC_KEY")?,
            access_token_ttl: parse_duration(&require_env("ACCESS_TOKEN_EXPIRED_IN")?)?,
            refresh_token_ttl: parse_duration(&require_env("REFRESH_TOKEN_EXPIRED_IN")?)?,
            access_cookie_max_age: parse_minutes(&require_env("ACCESS_TOKEN_MAXAGE")?)?,
            refresh_cookie_max_age: parse_minutes(&require_env("REFRESH_TOKEN_MAXAGE")?)?,
        })
    }

    /// Parse the configured key material into a ready token service.
    pub fn build_token_service(&self) -> Result<TokenService, Error> {
        Ok(TokenService::new(
            TokenKeyPair::from_rsa_pem(
                &self.access_token_private_key,
                &self.access_token_public_key,
                self.access_token_ttl,
            )?,
            TokenKeyPair::from_rsa_pem(
                &self.refresh_token_private_key,
                &self.refresh_token_public_key,
                self.refresh_token_ttl,
            )?,
        ))
    }

    pub fn verify_email_url(&self, code: &str) -> String {
        format!("{}/api/auth/verifyemail/{code}", self.base_url)
    }

    pub fn reset_password_url(&self, token: &str) -> String {
        format!("{}/api/auth/resetpassword/{token}", self.base_url)
    }
}

fn require_env(name: &str) -> Result<String, Error> {
    std::env::var(name).map_err(|_| Error::Config(format!("{name} is required")))
}

fn decode_key_env(name: &str) -> Result<Vec<u8>, Error> {
    let encoded = require_env(name)?;
    BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::Config(format!("{name} is not valid base64: {e}")))
}

/// Parse a duration of the form `30s`, `15m`, `12h`, or `7d`.
fn parse_duration(value: &str) -> Result<Duration, Error> {
    let value = value.trim();
    let (number, unit) = value.split_at(value.len().saturating_sub(1));

    let count: i64 = number
        .parse()
        .map_err(|_| Error::Config(format!("Invalid duration: {value}")))?;

    match unit {
        "s" => Ok(Duration::seconds(count)),
        "m" => Ok(Duration::minutes(count)),
        "h" => Ok(Duration::hours(count)),
        "d" => Ok(Duration::days(count)),
        _ => Err(Error::Config(format!("Invalid duration unit: {value}"))),
    }
}

fn parse_minutes(value: &str) -> Result<i64, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid minute count: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("15m").unwrap(), Duration::minutes(15));
        assert_eq!(parse_duration("12h").unwrap(), Duration::hours(12));
        assert_eq!(parse_duration("7d").unwrap(), Duration::days(7));
        assert_eq!(parse_duration(" 15m ").unwrap(), Duration::minutes(15));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("15").is_err());
        assert!(parse_duration("m").is_err());
        assert!(parse_duration("15w").is_err());
        assert!(parse_duration("fifteen minutes").is_err());
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("15").unwrap(), 15);
        assert!(parse_minutes("soon").is_err());
    }
}
