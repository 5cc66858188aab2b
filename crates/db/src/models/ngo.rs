use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ngo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
    pub registration_number: String,
    pub location: GeoPoint,
    #[serde(default = "bool_true")]
    pub is_active: bool,
    pub push_token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

fn bool_true() -> bool {
    true
}

impl Ngo {
    pub const COLLECTION: &'static str = "ngos";
}
