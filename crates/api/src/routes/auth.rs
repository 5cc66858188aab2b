use axum::{Json, extract::State, http::StatusCode};
use ngo_connect_services::dao::base::DaoError;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AccountResponse,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    /// "user" or "admin", resolved by which collection the email matched.
    pub role: String,
}

/// Minimal signup used by the login modal: email + password + role, with a
/// placeholder name. The full-profile registrations live under
/// `/api/users/register` and `/api/admin/register`.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let (Some(email), Some(password), Some(role)) = (body.email, body.password, body.role)
    else {
        return Err(ApiError::BadRequest("All fields required".to_string()));
    };

    let password_hash = state.auth.hash_password(&password)?;

    match role.as_str() {
        "user" => {
            if state.users.exists_by_email(&email).await? {
                return Err(ApiError::BadRequest("User already exists".to_string()));
            }
            state
                .users
                .create("User".to_string(), email, password_hash, String::new())
                .await?;
        }
        "admin" => {
            if state.admins.exists_by_email(&email).await? {
                return Err(ApiError::BadRequest("Admin already exists".to_string()));
            }
            state
                .admins
                .create("Admin".to_string(), email, password_hash, String::new())
                .await?;
        }
        _ => {
            return Err(ApiError::BadRequest(
                "role must be \"user\" or \"admin\"".to_string(),
            ));
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registered successfully" })),
    ))
}

/// Tries the `users` collection first, then `admins`; the role in the
/// response is whichever collection matched.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::BadRequest(
            "Email and password required".to_string(),
        ));
    };

    // Only an absent user falls through to admins; infrastructure errors
    // propagate as 500 instead of masquerading as bad credentials.
    let account = match state.users.find_by_email(&email).await {
        Ok(user) => Some((user.id, user.email, user.password_hash, "user".to_string())),
        Err(DaoError::NotFound) => None,
        Err(e) => return Err(e.into()),
    };

    let (id, account_email, hash, role) = match account {
        Some(found) => found,
        None => match state.admins.find_by_email(&email).await {
            Ok(admin) => (
                admin.id,
                admin.email,
                admin.password_hash,
                "admin".to_string(),
            ),
            Err(DaoError::NotFound) => {
                return Err(ApiError::BadRequest("Invalid credentials".to_string()));
            }
            Err(e) => return Err(e.into()),
        },
    };

    let hash = hash.ok_or_else(|| ApiError::BadRequest("Invalid credentials".to_string()))?;
    if !state.auth.verify_password(&password, &hash)? {
        return Err(ApiError::BadRequest("Invalid credentials".to_string()));
    }

    let id = id
        .ok_or_else(|| ApiError::Internal("Stored account has no id".to_string()))?
        .to_hex();

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: AccountResponse {
            id,
            email: account_email,
            role,
        },
    }))
}

/// Placeholder until sessions exist; the client trusts local storage.
pub async fn me() -> Json<serde_json::Value> {
    Json(json!({ "user": null }))
}
