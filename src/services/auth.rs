//! Admin authentication service

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha2::{Digest, Sha256};

use crate::{
    error::{AppError, AppResult},
    models::admin::{Admin, LoginRequest, RegisterRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// SHA-256 of the UTF-8 password bytes, base64-encoded. Deterministic
    /// and unsalted so hashes stored by the legacy system keep verifying.
    pub fn hash_password(password: &str) -> String {
        let digest = Sha256::digest(password.as_bytes());
        BASE64.encode(digest)
    }

    /// Register a new admin account. Fails when the username is taken.
    pub async fn register(&self, req: &RegisterRequest) -> AppResult<Admin> {
        if self.repository.admins.username_exists(&req.username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = Self::hash_password(&req.password);
        self.repository
            .admins
            .create(&req.username, &password_hash, &req.full_name, &req.email)
            .await
    }

    /// Check credentials and return the matching admin. The failure is
    /// the same whether the username or the password was wrong.
    pub async fn login(&self, req: &LoginRequest) -> AppResult<Admin> {
        let password_hash = Self::hash_password(&req.password);
        self.repository
            .admins
            .find_by_credentials(&req.username, &password_hash)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))
    }
}
