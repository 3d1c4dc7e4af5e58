use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_extra::extract::CookieJar;
use gatehouse_core::{AccountRepository, AccountService, AuthMailer, RegisterAccount};

use crate::{
    cookies::{CookieConfig, SessionCookies},
    error::{ApiError, Result},
    types::*,
};

pub struct AuthState<R: AccountRepository, M: AuthMailer + 'static> {
    pub service: Arc<AccountService<R, M>>,
    pub session: SessionCookies,
}

impl<R: AccountRepository, M: AuthMailer + 'static> Clone for AuthState<R, M> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            session: self.session.clone(),
        }
    }
}

/// Build the `/api/auth` router over a configured account service.
pub fn create_router<R, M>(
    service: Arc<AccountService<R, M>>,
    cookie_config: CookieConfig,
) -> Router
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    let state = AuthState {
        service,
        session: SessionCookies::new(cookie_config),
    };

    Router::new()
        .route("/api/auth/register", post(register_handler::<R, M>))
        .route("/api/auth/login", post(login_handler::<R, M>))
        .route("/api/auth/refresh", get(refresh_handler::<R, M>))
        .route("/api/auth/logout", get(logout_handler::<R, M>))
        .route(
            "/api/auth/verifyemail/{code}",
            get(verify_email_handler::<R, M>),
        )
        .route(
            "/api/auth/resend-verification",
            post(resend_verification_handler::<R, M>),
        )
        .route(
            "/api/auth/forgotpassword",
            post(forgot_password_handler::<R, M>),
        )
        .route(
            "/api/auth/resend-forgotpassword",
            post(resend_forgot_password_handler::<R, M>),
        )
        .route(
            "/api/auth/resetpassword/{token}",
            patch(reset_password_handler::<R, M>),
        )
        .with_state(state)
}

async fn register_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    let account = state
        .service
        .register(RegisterAccount {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            password_confirm: payload.password_confirm,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success(format!(
            "We sent an email with a verification code to {}",
            account.email
        ))),
    ))
}

async fn login_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    let (_, tokens) = state
        .service
        .sign_in(&payload.email, &payload.password)
        .await?;

    let jar = state
        .session
        .establish(jar, &tokens.access_token, &tokens.refresh_token);

    Ok((jar, Json(AccessTokenResponse::new(tokens.access_token))))
}

async fn refresh_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    jar: CookieJar,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    let refresh_token = state
        .session
        .refresh_token(&jar)
        .ok_or_else(|| ApiError::Forbidden("could not refresh access token".to_string()))?
        .to_string();

    let access_token = state.service.refresh_access_token(&refresh_token).await?;

    let jar = state.session.refresh(jar, &access_token);

    Ok((jar, Json(AccessTokenResponse::new(access_token))))
}

async fn logout_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    jar: CookieJar,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    // Stateless logout: no token is invalidated server-side, the cookies
    // are simply expired on the client.
    let jar = state.session.clear(jar);

    Ok((jar, Json(MessageResponse::success("successfully logged out"))))
}

async fn verify_email_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    state.service.verify_email(&code).await?;

    Ok(Json(MessageResponse::success("Email verified successfully")))
}

async fn resend_verification_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    Json(payload): Json<EmailRequest>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    state.service.resend_verification(&payload.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success(format!(
            "We sent an email with a verification code to {}",
            payload.email.to_lowercase()
        ))),
    ))
}

async fn forgot_password_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    Json(payload): Json<EmailRequest>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    state.service.forgot_password(&payload.email).await?;

    Ok(Json(MessageResponse::success(
        "You will receive a reset email if user with that email exist",
    )))
}

async fn resend_forgot_password_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    Json(payload): Json<EmailRequest>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    state
        .service
        .resend_forgot_password(&payload.email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success(
            "You will receive a reset email if user with that email exist",
        )),
    ))
}

async fn reset_password_handler<R, M>(
    State(state): State<AuthState<R, M>>,
    jar: CookieJar,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse>
where
    R: AccountRepository,
    M: AuthMailer + 'static,
{
    state
        .service
        .reset_password(&token, &payload.password)
        .await?;

    // Force re-authentication with the new password.
    let jar = state.session.clear(jar);

    Ok((
        jar,
        Json(MessageResponse::success(
            "Password data updated successfully",
        )),
    ))
}
