use bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Same shape as [`super::User`], kept in its own collection: role is implied
/// by collection membership, resolved at login time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub phone: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Admin {
    pub const COLLECTION: &'static str = "admins";
}
