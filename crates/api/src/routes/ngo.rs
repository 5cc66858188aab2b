use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use ngo_connect_db::models::{GeoPoint, Ngo};
use serde::{Deserialize, Serialize};

use super::{LocationBody, parse_location};
use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterNgoRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
    pub registration_number: Option<String>,
    pub location: Option<LocationBody>,
    pub push_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterNgoResponse {
    pub message: String,
    pub ngo_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
    pub registration_number: String,
    pub location: GeoPoint,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct NgoListResponse {
    pub message: String,
    pub count: usize,
    pub ngos: Vec<NgoResponse>,
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl NgoResponse {
    fn from_model(ngo: Ngo) -> Self {
        Self {
            id: ngo.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: ngo.name,
            email: ngo.email,
            phone: ngo.phone,
            address: ngo.address,
            city: ngo.city,
            state: ngo.state,
            description: ngo.description,
            registration_number: ngo.registration_number,
            location: ngo.location,
            is_active: ngo.is_active,
            created_at: ngo
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterNgoRequest>,
) -> Result<(StatusCode, Json<RegisterNgoResponse>), ApiError> {
    let (Some(name), Some(email), Some(phone), Some(address), Some(registration_number)) = (
        body.name,
        body.email,
        body.phone,
        body.address,
        body.registration_number,
    ) else {
        return Err(ApiError::BadRequest(
            "Name, email, phone, address, registrationNumber and location are required"
                .to_string(),
        ));
    };

    let Some(location) = body.location else {
        return Err(ApiError::BadRequest(
            "Name, email, phone, address, registrationNumber and location are required"
                .to_string(),
        ));
    };
    let location = parse_location(&location)?;

    if state
        .ngos
        .exists_by_email_or_registration(&email, &registration_number)
        .await?
    {
        return Err(ApiError::BadRequest(
            "NGO already exists with this email or registration number".to_string(),
        ));
    }

    let ngo = state
        .ngos
        .create(
            name,
            email,
            phone,
            address,
            body.city,
            body.state,
            body.description,
            registration_number,
            location,
            body.push_token.filter(|t| !t.is_empty()),
        )
        .await?;

    let ngo_id = ngo
        .id
        .ok_or_else(|| ApiError::Internal("Stored NGO has no id".to_string()))?
        .to_hex();

    Ok((
        StatusCode::CREATED,
        Json(RegisterNgoResponse {
            message: "NGO registered successfully".to_string(),
            ngo_id,
        }),
    ))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<NgoListResponse>, ApiError> {
    let ngos = state.ngos.list_active().await?;

    let ngos: Vec<NgoResponse> = ngos.into_iter().map(NgoResponse::from_model).collect();

    Ok(Json(NgoListResponse {
        message: "NGOs fetched successfully".to_string(),
        count: ngos.len(),
        ngos,
    }))
}

pub async fn nearby(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NgoListResponse>, ApiError> {
    let (Some(lat), Some(lng)) = (query.lat, query.lng) else {
        return Err(ApiError::BadRequest(
            "Latitude and longitude are required".to_string(),
        ));
    };

    let latitude: f64 = lat
        .parse()
        .map_err(|_| ApiError::BadRequest("Latitude and longitude must be numbers".to_string()))?;
    let longitude: f64 = lng
        .parse()
        .map_err(|_| ApiError::BadRequest("Latitude and longitude must be numbers".to_string()))?;

    let ngos = state.ngos.find_nearby(longitude, latitude).await?;

    let ngos: Vec<NgoResponse> = ngos.into_iter().map(NgoResponse::from_model).collect();

    Ok(Json(NgoListResponse {
        message: "Nearby NGOs fetched successfully".to_string(),
        count: ngos.len(),
        ngos,
    }))
}
