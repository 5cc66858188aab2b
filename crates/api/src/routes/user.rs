use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub message: String,
    pub user_id: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (body.name, body.email, body.password)
    else {
        return Err(ApiError::BadRequest(
            "Name, email and password are required".to_string(),
        ));
    };

    if state.users.exists_by_email(&email).await? {
        return Err(ApiError::BadRequest(
            "User already exists with this email".to_string(),
        ));
    }

    let password_hash = state.auth.hash_password(&password)?;

    let user = state
        .users
        .create(name, email, password_hash, body.phone.unwrap_or_default())
        .await?;

    let user_id = user
        .id
        .ok_or_else(|| ApiError::Internal("Stored user has no id".to_string()))?
        .to_hex();

    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}
