//! Registration, login, and account handlers.
//!
//! ## Endpoints
//! ```text
//! POST /auth/register   create account, 201 + public user view
//! POST /auth/login      verify password, 200 + bearer token
//! POST /auth/logout     revoke the presented token, 204
//! GET  /users/me        public view of the authenticated account
//! ```
//!
//! Registration sends a welcome email out of band; email failure never
//! fails the request.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use acronyms_db::User;

use crate::auth::{self, bearer_token, current_user};
use crate::error::ApiError;
use crate::state::AppState;

/// Credentials for register and login.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// What a user account looks like from outside.
///
/// The password hash never appears here.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    pub is_verified: bool,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        UserOut {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            is_verified: user.is_verified,
        }
    }
}

/// Token issued at login.
#[derive(Debug, Serialize)]
pub struct TokenOut {
    pub access_token: String,
    pub token_type: &'static str,
}

fn validate_credentials(credentials: &Credentials) -> Result<(), ApiError> {
    if credentials.email.is_empty() || !credentials.email.contains('@') {
        return Err(ApiError::InvalidArgument(
            "email must be a valid address".to_string(),
        ));
    }
    if credentials.password.is_empty() {
        return Err(ApiError::InvalidArgument(
            "password must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<UserOut>), ApiError> {
    validate_credentials(&credentials)?;

    let hashed = auth::hash_password(&credentials.password)?;
    let user = state.db.users().insert(&credentials.email, &hashed).await?;

    info!(user_id = %user.id, "Registered user");

    // Delivery happens after the account is committed; a mail outage
    // must not undo a registration.
    let mailer = state.mailer.clone();
    let recipient = user.email.clone();
    tokio::spawn(async move {
        mailer.send_welcome(&recipient).await;
    });

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `POST /auth/login`
///
/// Unknown email and wrong password produce the same 401, so the
/// endpoint cannot be used to probe which addresses are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenOut>, ApiError> {
    let invalid = || ApiError::Unauthorized("Invalid credentials".to_string());

    let user = state
        .db
        .users()
        .get_by_email(&credentials.email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        warn!(user_id = %user.id, "Login attempt for inactive user");
        return Err(invalid());
    }

    if !auth::verify_password(&credentials.password, &user.hashed_password) {
        return Err(invalid());
    }

    let token = state
        .db
        .tokens()
        .create(&user.id, state.settings.token_lifetime_secs)
        .await?;

    Ok(Json(TokenOut {
        access_token: token.token,
        token_type: "bearer",
    }))
}

/// `POST /auth/logout`
///
/// Revoking an already-revoked token still succeeds; only a request
/// with no token at all is rejected.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    state.db.tokens().delete(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /users/me`
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserOut>, ApiError> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(user.into()))
}
