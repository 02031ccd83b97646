//! # User and Access Token Repositories
//!
//! Database operations for the registration/login layer.
//!
//! Authentication is database-backed: logging in stores an opaque random
//! token with an expiry, and a request is authenticated when its bearer
//! token still exists and has not expired. Logging out deletes the token.
//! Acronym routes never consult these tables; the check is wired only on
//! the user routes.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

// =============================================================================
// Records
// =============================================================================

/// A registered user account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// UUID v4, assigned at registration.
    pub id: String,

    /// Login identifier, unique across accounts.
    pub email: String,

    /// Argon2 password hash. Never leaves the server.
    pub hashed_password: String,

    /// Inactive accounts cannot log in.
    pub is_active: bool,

    /// Set once the verification email link is followed.
    pub is_verified: bool,

    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// A database-backed bearer token.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccessToken {
    /// Opaque random token string handed to the client.
    pub token: String,

    /// Owning user id.
    pub user_id: String,

    /// Issue timestamp.
    pub created_at: DateTime<Utc>,

    /// Tokens past this instant are treated as absent.
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// User Repository
// =============================================================================

/// Repository for user account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user account.
    ///
    /// ## Returns
    /// * `Ok(User)` - The stored account
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn insert(&self, email: &str, hashed_password: &str) -> DbResult<User> {
        debug!(email = %email, "Registering user");

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, email, hashed_password, is_active, is_verified, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .bind(user.is_active)
        .bind(user.is_verified)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    /// Gets a user by email.
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password, is_active, is_verified, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, hashed_password, is_active, is_verified, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Marks a user's email as verified.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No user with that id
    pub async fn set_verified(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("UPDATE users SET is_verified = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        Ok(())
    }
}

// =============================================================================
// Access Token Repository
// =============================================================================

/// Repository for bearer token operations.
#[derive(Debug, Clone)]
pub struct AccessTokenRepository {
    pool: SqlitePool,
}

impl AccessTokenRepository {
    /// Creates a new AccessTokenRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AccessTokenRepository { pool }
    }

    /// Issues a fresh token for a user.
    ///
    /// The token value is an opaque UUID; nothing about the user can be
    /// derived from it without the database.
    pub async fn create(&self, user_id: &str, lifetime_secs: i64) -> DbResult<AccessToken> {
        let now = Utc::now();
        let token = AccessToken {
            token: Uuid::new_v4().simple().to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            expires_at: now + Duration::seconds(lifetime_secs),
        };

        sqlx::query(
            "INSERT INTO access_tokens (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&token.token)
        .bind(&token.user_id)
        .bind(token.created_at)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await?;

        debug!(user_id = %user_id, "Issued access token");
        Ok(token)
    }

    /// Looks up a token, treating expired tokens as absent.
    pub async fn get_valid(&self, token: &str) -> DbResult<Option<AccessToken>> {
        let record = sqlx::query_as::<_, AccessToken>(
            r#"
            SELECT token, user_id, created_at, expires_at
            FROM access_tokens
            WHERE token = ? AND expires_at > ?
            "#,
        )
        .bind(token)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Deletes a token (logout).
    ///
    /// Deleting an unknown token is a no-op; logout is idempotent.
    pub async fn delete(&self, token: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM access_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Removes all expired tokens (housekeeping).
    pub async fn purge_expired(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM access_tokens WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
