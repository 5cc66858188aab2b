pub mod admin;
pub mod auth;
pub mod help_request;
pub mod ngo;
pub mod user;

use ngo_connect_db::models::GeoPoint;
use serde::Deserialize;

use crate::error::ApiError;

/// GeoJSON-shaped location as it arrives on the wire. `coordinates` is
/// `[longitude, latitude]`; a missing array is reported as a 400, not a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LocationBody {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub coordinates: Option<Vec<f64>>,
}

pub(crate) fn parse_location(location: &LocationBody) -> Result<GeoPoint, ApiError> {
    let coordinates = location
        .coordinates
        .as_ref()
        .ok_or_else(|| ApiError::BadRequest("location.coordinates is required".to_string()))?;

    if coordinates.len() != 2 {
        return Err(ApiError::BadRequest(
            "location.coordinates must be [longitude, latitude]".to_string(),
        ));
    }

    let (longitude, latitude) = (coordinates[0], coordinates[1]);
    if !longitude.is_finite()
        || !latitude.is_finite()
        || !(-180.0..=180.0).contains(&longitude)
        || !(-90.0..=90.0).contains(&latitude)
    {
        return Err(ApiError::BadRequest("Invalid coordinates".to_string()));
    }

    if let Some(kind) = &location.kind {
        if kind != "Point" {
            return Err(ApiError::BadRequest(
                "location.type must be \"Point\"".to_string(),
            ));
        }
    }

    Ok(GeoPoint::new(longitude, latitude))
}
