use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterAdminRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAdminResponse {
    pub message: String,
    pub admin_id: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterAdminRequest>,
) -> Result<(StatusCode, Json<RegisterAdminResponse>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (body.name, body.email, body.password)
    else {
        return Err(ApiError::BadRequest(
            "Name, email and password are required".to_string(),
        ));
    };

    if state.admins.exists_by_email(&email).await? {
        return Err(ApiError::BadRequest(
            "Admin already exists with this email".to_string(),
        ));
    }

    let password_hash = state.auth.hash_password(&password)?;

    let admin = state
        .admins
        .create(name, email, password_hash, body.phone.unwrap_or_default())
        .await?;

    let admin_id = admin
        .id
        .ok_or_else(|| ApiError::Internal("Stored admin has no id".to_string()))?
        .to_hex();

    Ok((
        StatusCode::CREATED,
        Json(RegisterAdminResponse {
            message: "Admin registered successfully".to_string(),
            admin_id,
        }),
    ))
}
