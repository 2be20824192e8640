//! Admins repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::admin::Admin};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Postgres>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check if a username is already taken
    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM admins WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create an admin account
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        full_name: &str,
        email: &str,
    ) -> AppResult<Admin> {
        let row = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, password_hash, full_name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(full_name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Look up an admin by username and password hash in one comparison,
    /// so a miss reveals nothing about which half failed
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE username = $1 AND password_hash = $2",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }
}
