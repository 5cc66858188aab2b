use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Who reported the needy person.
    pub reported_by: ObjectId,
    pub help_type: HelpType,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub location: GeoPoint,
    #[serde(default)]
    pub status: HelpStatus,
    /// NGO who accepted the request.
    pub accepted_by_ngo: Option<ObjectId>,
    pub accepted_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpType {
    Food,
    Medical,
    Shelter,
    Clothes,
    Education,
    Other,
}

impl HelpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpType::Food => "food",
            HelpType::Medical => "medical",
            HelpType::Shelter => "shelter",
            HelpType::Clothes => "clothes",
            HelpType::Education => "education",
            HelpType::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food" => Some(HelpType::Food),
            "medical" => Some(HelpType::Medical),
            "shelter" => Some(HelpType::Shelter),
            "clothes" => Some(HelpType::Clothes),
            "education" => Some(HelpType::Education),
            "other" => Some(HelpType::Other),
            _ => None,
        }
    }
}

/// Lifecycle: pending -> accepted -> helped, no other transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HelpStatus {
    #[default]
    Pending,
    Accepted,
    Helped,
}

impl HelpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpStatus::Pending => "pending",
            HelpStatus::Accepted => "accepted",
            HelpStatus::Helped => "helped",
        }
    }
}

impl HelpRequest {
    pub const COLLECTION: &'static str = "help_requests";
}
