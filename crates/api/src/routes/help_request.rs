use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bson::oid::ObjectId;
use ngo_connect_db::models::{GeoPoint, HelpRequest, HelpType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LocationBody, parse_location};
use crate::{error::ApiError, state::AppState};

const PUSH_BODY: &str = "A new help request is available near your location";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestRequest {
    pub reported_by: Option<String>,
    pub help_type: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<LocationBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestResponse {
    pub message: String,
    pub help_request_id: String,
    #[serde(rename = "notifiedNGOs")]
    pub notified_ngos: usize,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRequest {
    pub ngo_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    pub message: String,
    pub help_request_id: String,
    pub status: String,
}

/// Contact card for the reporter / accepting NGO, matching the fields the
/// original API projected when populating references.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestResponse {
    pub id: String,
    pub reported_by: Option<ContactResponse>,
    pub help_type: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub location: GeoPoint,
    pub status: String,
    #[serde(rename = "acceptedByNGO")]
    pub accepted_by_ngo: Option<ContactResponse>,
    pub accepted_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestListResponse {
    pub message: String,
    pub count: usize,
    pub help_requests: Vec<HelpRequestResponse>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateHelpRequestRequest>,
) -> Result<(StatusCode, Json<CreateHelpRequestResponse>), ApiError> {
    let (Some(reported_by), Some(help_type), Some(location)) =
        (body.reported_by, body.help_type, body.location)
    else {
        return Err(ApiError::BadRequest(
            "reportedBy, helpType and location (coordinates) are required".to_string(),
        ));
    };

    let reporter_id = ObjectId::parse_str(&reported_by)
        .map_err(|_| ApiError::BadRequest("Invalid reportedBy".to_string()))?;
    if state
        .users
        .base
        .find_one(bson::doc! { "_id": reporter_id })
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest("Reporter not found".to_string()));
    }

    let help_type = HelpType::parse(&help_type).ok_or_else(|| {
        ApiError::BadRequest(
            "helpType must be one of: food, medical, shelter, clothes, education, other"
                .to_string(),
        )
    })?;

    let location = parse_location(&location)?;

    let request = state
        .help_requests
        .create(
            reporter_id,
            help_type,
            body.description,
            body.image_url,
            location.clone(),
        )
        .await?;

    let request_id = request
        .id
        .ok_or_else(|| ApiError::Internal("Stored help request has no id".to_string()))?
        .to_hex();

    // Fan out to nearby NGOs; the response does not wait for delivery.
    let nearby = state
        .ngos
        .find_nearby(location.longitude(), location.latitude())
        .await?;
    let tokens: Vec<String> = nearby
        .into_iter()
        .filter_map(|ngo| ngo.push_token)
        .filter(|t| !t.is_empty())
        .collect();
    let notified_ngos = tokens.len();

    if !tokens.is_empty() {
        let push = state.push.clone();
        tokio::spawn(async move {
            let sent = push.notify_new_help_request(tokens, PUSH_BODY).await;
            debug!(sent, "Push fan-out finished");
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateHelpRequestResponse {
            message: "Help request created successfully".to_string(),
            help_request_id: request_id,
            notified_ngos,
            status: request.status.as_str().to_string(),
        }),
    ))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<HelpRequestListResponse>, ApiError> {
    let requests = state.help_requests.list().await?;

    let reporter_ids: Vec<ObjectId> = requests.iter().map(|r| r.reported_by).collect();
    let ngo_ids: Vec<ObjectId> = requests.iter().filter_map(|r| r.accepted_by_ngo).collect();

    let reporters: HashMap<ObjectId, ContactResponse> = state
        .users
        .find_by_ids(&reporter_ids)
        .await?
        .into_iter()
        .filter_map(|u| {
            u.id.map(|id| {
                (
                    id,
                    ContactResponse {
                        id: id.to_hex(),
                        name: u.name,
                        email: u.email,
                        phone: u.phone,
                    },
                )
            })
        })
        .collect();

    let ngos: HashMap<ObjectId, ContactResponse> = state
        .ngos
        .find_by_ids(&ngo_ids)
        .await?
        .into_iter()
        .filter_map(|n| {
            n.id.map(|id| {
                (
                    id,
                    ContactResponse {
                        id: id.to_hex(),
                        name: n.name,
                        email: n.email,
                        phone: n.phone,
                    },
                )
            })
        })
        .collect();

    let help_requests: Vec<HelpRequestResponse> = requests
        .into_iter()
        .map(|r| {
            let reporter = reporters.get(&r.reported_by).cloned();
            let ngo = r
                .accepted_by_ngo
                .and_then(|id| ngos.get(&id).cloned());
            to_response(r, reporter, ngo)
        })
        .collect();

    Ok(Json(HelpRequestListResponse {
        message: "Help requests fetched successfully".to_string(),
        count: help_requests.len(),
        help_requests,
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HelpRequestResponse>, ApiError> {
    let id = parse_request_id(&id)?;

    let request = state
        .help_requests
        .base
        .find_one(bson::doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::NotFound("Help request not found".to_string()))?;

    let reporter = state
        .users
        .base
        .find_one(bson::doc! { "_id": request.reported_by })
        .await?
        .and_then(|u| {
            u.id.map(|uid| ContactResponse {
                id: uid.to_hex(),
                name: u.name,
                email: u.email,
                phone: u.phone,
            })
        });

    let ngo = match request.accepted_by_ngo {
        Some(ngo_id) => state
            .ngos
            .base
            .find_one(bson::doc! { "_id": ngo_id })
            .await?
            .and_then(|n| {
                n.id.map(|nid| ContactResponse {
                    id: nid.to_hex(),
                    name: n.name,
                    email: n.email,
                    phone: n.phone,
                })
            }),
        None => None,
    };

    Ok(Json(to_response(request, reporter, ngo)))
}

pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AcceptRequest>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let Some(ngo_id) = body.ngo_id else {
        return Err(ApiError::BadRequest("ngoId is required".to_string()));
    };
    let ngo_id = ObjectId::parse_str(&ngo_id)
        .map_err(|_| ApiError::BadRequest("Invalid ngoId".to_string()))?;

    let id = parse_request_id(&id)?;

    // Conditional update: a concurrent accept of the same request makes one
    // of the two writers observe None here.
    match state.help_requests.accept(id, ngo_id).await? {
        Some(request) => Ok(Json(TransitionResponse {
            message: "Help request accepted by NGO".to_string(),
            help_request_id: id.to_hex(),
            status: request.status.as_str().to_string(),
        })),
        None => match state
            .help_requests
            .base
            .find_one(bson::doc! { "_id": id })
            .await?
        {
            Some(_) => Err(ApiError::BadRequest(
                "Help request already accepted or completed".to_string(),
            )),
            None => Err(ApiError::NotFound("Help request not found".to_string())),
        },
    }
}

pub async fn helped(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let id = parse_request_id(&id)?;

    match state.help_requests.mark_helped(id).await? {
        Some(request) => Ok(Json(TransitionResponse {
            message: "Help request marked as helped".to_string(),
            help_request_id: id.to_hex(),
            status: request.status.as_str().to_string(),
        })),
        None => match state
            .help_requests
            .base
            .find_one(bson::doc! { "_id": id })
            .await?
        {
            Some(_) => Err(ApiError::BadRequest(
                "Help request must be accepted before marking as helped".to_string(),
            )),
            None => Err(ApiError::NotFound("Help request not found".to_string())),
        },
    }
}

fn parse_request_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id)
        .map_err(|_| ApiError::BadRequest("Invalid help request id".to_string()))
}

fn to_response(
    request: HelpRequest,
    reporter: Option<ContactResponse>,
    ngo: Option<ContactResponse>,
) -> HelpRequestResponse {
    HelpRequestResponse {
        id: request.id.map(|id| id.to_hex()).unwrap_or_default(),
        reported_by: reporter,
        help_type: request.help_type.as_str().to_string(),
        description: request.description,
        image_url: request.image_url,
        location: request.location,
        status: request.status.as_str().to_string(),
        accepted_by_ngo: ngo,
        accepted_at: request
            .accepted_at
            .and_then(|at| at.try_to_rfc3339_string().ok()),
        created_at: request
            .created_at
            .try_to_rfc3339_string()
            .unwrap_or_default(),
    }
}
