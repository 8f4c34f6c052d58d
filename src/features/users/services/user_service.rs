use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, ListUsersQuery, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE, STATUS_ACTIVE};
use crate::shared::pagination::{KeysetQuery, NextPageInfo};
use crate::shared::password;

const USER_COLUMNS: &str = "id, uuid, email, password_hash, full_name, phone, \
     sign_up_option, status, timezone, created_at, updated_at";

const SQL_SELECT_USER_BY_ID: &str = "SELECT id, uuid, email, password_hash, full_name, phone, \
     sign_up_option, status, timezone, created_at, updated_at FROM users WHERE id = $1";

const SQL_SELECT_USER_BY_UUID: &str = "SELECT id, uuid, email, password_hash, full_name, phone, \
     sign_up_option, status, timezone, created_at, updated_at FROM users WHERE uuid = $1";

const SQL_CHECK_EMAIL_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)";

const SQL_INSERT_USER: &str = "INSERT INTO users (email, password_hash, full_name, phone, \
     sign_up_option, timezone) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";

const SQL_INSERT_USER_SALT: &str = "INSERT INTO user_salts (user_id, salt) VALUES ($1, $2)";

const SQL_UPDATE_USER: &str = "UPDATE users SET email = $1, full_name = $2, phone = $3, \
     timezone = $4, updated_at = NOW() WHERE id = $5";

/// Service for user operations
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a user: salt and hash the password, then insert the user row and
    /// its salt row in one transaction and re-read the committed row.
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let email = dto.email.to_lowercase();

        // email is unique in storage, so the pre-check runs outside the
        // transaction; the constraint still backstops concurrent creators
        self.check_email_exists(&email).await?;

        let salt = password::generate_salt()?;
        let password_hash = password::hash_password(&dto.password, &salt)?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let id = match Self::insert_user(&mut tx, &dto, &email, &password_hash, &salt).await {
            Ok(id) => id,
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    tracing::warn!("unable to rollback transaction: {:?}", rb);
                }
                return Err(e);
            }
        };

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit user creation: {:?}", e);
            AppError::Database(e)
        })?;

        let user = self.find_by_id(id).await?;

        tracing::info!("User created: uuid={}, email={}", user.uuid, user.email);

        Ok(user.into())
    }

    /// Updates a user's mutable fields, re-checking email uniqueness only when
    /// the email actually changes.
    pub async fn update(&self, user_uuid: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let existing = self.find_by_uuid(user_uuid).await?;
        let email = dto.email.to_lowercase();

        if existing.email != email {
            self.check_email_exists(&email).await?;
        }

        sqlx::query(SQL_UPDATE_USER)
            .bind(&email)
            .bind(&dto.full_name)
            .bind(&dto.phone)
            .bind(dto.timezone.to_lowercase())
            .bind(existing.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update user {}: {:?}", user_uuid, e);
                AppError::Database(e)
            })?;

        let user = self.find_by_id(existing.id).await?;

        Ok(user.into())
    }

    /// Lists users with keyset pagination. Filters are applied in a fixed order
    /// (status, sign-up option, timezone); status defaults to "active".
    pub async fn find_all(
        &self,
        query: ListUsersQuery,
    ) -> Result<(Vec<UserResponseDto>, NextPageInfo)> {
        let from_id = query.from_id.unwrap_or(0);
        if from_id < 0 {
            return Err(AppError::BadRequest(format!(
                "fromId must be non-negative, got {}",
                from_id
            )));
        }

        let page_size = match query.page_size {
            Some(ps) if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&ps) => {
                return Err(AppError::BadRequest(format!(
                    "pageSize must be between {} and {}, got {}",
                    MIN_PAGE_SIZE, MAX_PAGE_SIZE, ps
                )));
            }
            Some(ps) => ps,
            None => DEFAULT_PAGE_SIZE,
        };

        let status = query
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| STATUS_ACTIVE.to_string());

        let (users, page_info) = KeysetQuery::new("users", USER_COLUMNS, "id")
            .from_id(from_id)
            .page_size(page_size)
            .filter("status", Some(status))
            .filter("sign_up_option", query.sign_up_option)
            .filter("timezone", query.timezone.map(|tz| tz.to_lowercase()))
            .fetch_page::<User>(&self.pool, |u| u.id)
            .await?;

        Ok((users.into_iter().map(|u| u.into()).collect(), page_info))
    }

    async fn insert_user(
        tx: &mut Transaction<'_, Postgres>,
        dto: &CreateUserDto,
        email: &str,
        password_hash: &str,
        salt: &str,
    ) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(SQL_INSERT_USER)
            .bind(email)
            .bind(password_hash)
            .bind(&dto.full_name)
            .bind(&dto.phone)
            .bind(&dto.sign_up_option)
            .bind(dto.timezone.to_lowercase())
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppError::Conflict(format!("user already exists: {}", email));
                    }
                }
                tracing::error!("Failed to insert user: {:?}", e);
                AppError::Database(e)
            })?;

        sqlx::query(SQL_INSERT_USER_SALT)
            .bind(id)
            .bind(salt)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert user salt: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(id)
    }

    async fn check_email_exists(&self, email: &str) -> Result<()> {
        let exists: bool = sqlx::query_scalar(SQL_CHECK_EMAIL_EXISTS)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check existing email: {:?}", e);
                AppError::Database(e)
            })?;

        if exists {
            tracing::warn!("user already exists with email: {}", email);
            return Err(AppError::Conflict(format!(
                "user already exists: {}",
                email
            )));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>(SQL_SELECT_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read user {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        user.ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))
    }

    async fn find_by_uuid(&self, user_uuid: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(SQL_SELECT_USER_BY_UUID)
            .bind(user_uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read user {}: {:?}", user_uuid, e);
                AppError::Database(e)
            })?;

        user.ok_or_else(|| AppError::NotFound(format!("user {} not found", user_uuid)))
    }
}
