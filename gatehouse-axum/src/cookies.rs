//! The session-cookie contract.
//!
//! Three cookies travel together: `access_token` and `refresh_token` are
//! http-only bearers; `logged_in` is a readable flag with the access
//! token's lifetime, a UI hint only and never trusted for authorization.
//! All three share path `/` and the configured domain. Sign-in sets all
//! three, refresh re-sets `access_token` and `logged_in`, logout and
//! reset-password completion clear all three with immediate expiry.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use gatehouse_core::AuthConfig;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
pub const LOGGED_IN_COOKIE: &str = "logged_in";

#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub domain: String,
    pub path: String,
    pub secure: bool,
    /// Lifetimes in minutes, mirroring the token TTL configuration.
    pub access_max_age_minutes: i64,
    pub refresh_max_age_minutes: i64,
}

impl CookieConfig {
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        Self {
            domain: config.domain.clone(),
            path: "/".to_string(),
            secure: false,
            access_max_age_minutes: config.access_cookie_max_age,
            refresh_max_age_minutes: config.refresh_cookie_max_age,
        }
    }
}

/// Translates issued tokens into the cookie triple and back out of it.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    config: CookieConfig,
}

impl SessionCookies {
    pub fn new(config: CookieConfig) -> Self {
        Self { config }
    }

    /// Set all three cookies at sign-in.
    pub fn establish(&self, jar: CookieJar, access_token: &str, refresh_token: &str) -> CookieJar {
        jar.add(self.bearer_cookie(
            ACCESS_TOKEN_COOKIE,
            access_token,
            self.config.access_max_age_minutes,
        ))
        .add(self.bearer_cookie(
            REFRESH_TOKEN_COOKIE,
            refresh_token,
            self.config.refresh_max_age_minutes,
        ))
        .add(self.logged_in_cookie())
    }

    /// Re-set the access token and the flag after a refresh. The refresh
    /// cookie is left untouched.
    pub fn refresh(&self, jar: CookieJar, access_token: &str) -> CookieJar {
        jar.add(self.bearer_cookie(
            ACCESS_TOKEN_COOKIE,
            access_token,
            self.config.access_max_age_minutes,
        ))
        .add(self.logged_in_cookie())
    }

    /// Expire all three cookies immediately.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        let mut jar = jar;
        for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, LOGGED_IN_COOKIE] {
            let cookie = Cookie::build((name, ""))
                .domain(self.config.domain.clone())
                .path(self.config.path.clone())
                .build();
            jar = jar.remove(cookie);
        }
        jar
    }

    /// The refresh-token cookie value from an incoming request, if present.
    pub fn refresh_token<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(REFRESH_TOKEN_COOKIE).map(|c| c.value())
    }

    fn bearer_cookie(&self, name: &'static str, value: &str, max_age_minutes: i64) -> Cookie<'static> {
        Cookie::build((name, value.to_string()))
            .domain(self.config.domain.clone())
            .path(self.config.path.clone())
            .max_age(time::Duration::minutes(max_age_minutes))
            .http_only(true)
            .secure(self.config.secure)
            .build()
    }

    fn logged_in_cookie(&self) -> Cookie<'static> {
        Cookie::build((LOGGED_IN_COOKIE, "true"))
            .domain(self.config.domain.clone())
            .path(self.config.path.clone())
            .max_age(time::Duration::minutes(self.config.access_max_age_minutes))
            .http_only(false)
            .secure(self.config.secure)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> SessionCookies {
        SessionCookies::new(CookieConfig {
            domain: "localhost".to_string(),
            path: "/".to_string(),
            secure: false,
            access_max_age_minutes: 15,
            refresh_max_age_minutes: 60,
        })
    }

    #[test]
    fn test_establish_sets_all_three_cookies() {
        let session = test_session();
        let jar = session.establish(CookieJar::new(), "access-jwt", "refresh-jwt");

        let access = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
        assert_eq!(access.value(), "access-jwt");
        assert_eq!(access.http_only(), Some(true));
        assert_eq!(access.path(), Some("/"));
        assert_eq!(access.domain(), Some("localhost"));
        assert_eq!(access.max_age(), Some(time::Duration::minutes(15)));

        let refresh = jar.get(REFRESH_TOKEN_COOKIE).unwrap();
        assert_eq!(refresh.value(), "refresh-jwt");
        assert_eq!(refresh.http_only(), Some(true));
        assert_eq!(refresh.max_age(), Some(time::Duration::minutes(60)));

        // The flag cookie is readable by scripts and tracks the access TTL.
        let flag = jar.get(LOGGED_IN_COOKIE).unwrap();
        assert_eq!(flag.value(), "true");
        assert_ne!(flag.http_only(), Some(true));
        assert_eq!(flag.max_age(), Some(time::Duration::minutes(15)));
    }

    #[test]
    fn test_refresh_resets_access_and_flag_only() {
        let session = test_session();
        let jar = session.refresh(CookieJar::new(), "new-access-jwt");

        assert_eq!(jar.get(ACCESS_TOKEN_COOKIE).unwrap().value(), "new-access-jwt");
        assert_eq!(jar.get(LOGGED_IN_COOKIE).unwrap().value(), "true");
        assert!(jar.get(REFRESH_TOKEN_COOKIE).is_none());
    }

    #[test]
    fn test_clear_expires_all_three() {
        let session = test_session();
        let jar = session.establish(CookieJar::new(), "access-jwt", "refresh-jwt");
        let jar = session.clear(jar);

        // All three are gone from the jar; the response carries removal
        // cookies with an expiry in the past.
        assert!(jar.get(ACCESS_TOKEN_COOKIE).is_none());
        assert!(jar.get(REFRESH_TOKEN_COOKIE).is_none());
        assert!(jar.get(LOGGED_IN_COOKIE).is_none());
    }

    #[test]
    fn test_refresh_token_lookup() {
        let session = test_session();

        let jar = CookieJar::new().add(Cookie::new(REFRESH_TOKEN_COOKIE, "refresh-jwt"));
        assert_eq!(session.refresh_token(&jar), Some("refresh-jwt"));

        let empty = CookieJar::new();
        assert_eq!(session.refresh_token(&empty), None);
    }
}
