//! Authentication API endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::admin::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
};

/// Register an admin account (initial setup)
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Admin registered", body = RegisterResponse),
        (status = 400, description = "Username already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    state.services.auth.register(&req).await?;
    Ok(Json(RegisterResponse {
        message: "Admin registered successfully".to_string(),
    }))
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = state.services.auth.login(&req).await?;
    Ok(Json(LoginResponse {
        success: true,
        admin_id: admin.id,
        username: admin.username,
        full_name: admin.full_name,
        email: admin.email,
    }))
}
