use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use ngo_connect_db::models::{GeoPoint, Ngo};

use super::base::{BaseDao, DaoResult};

/// Radius for the proximity search, in meters.
pub const NEARBY_RADIUS_METERS: i32 = 25_000;

pub struct NgoDao {
    pub base: BaseDao<Ngo>,
}

impl NgoDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Ngo::COLLECTION),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: String,
        address: String,
        city: Option<String>,
        state: Option<String>,
        description: Option<String>,
        registration_number: String,
        location: GeoPoint,
        push_token: Option<String>,
    ) -> DaoResult<Ngo> {
        let now = DateTime::now();
        let ngo = Ngo {
            id: None,
            name,
            email,
            phone,
            address,
            city,
            state,
            description,
            registration_number,
            location,
            is_active: true,
            push_token,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&ngo).await?;
        self.base.find_by_id(id).await
    }

    /// Friendly duplicate pre-check; the unique indexes remain the backstop.
    pub async fn exists_by_email_or_registration(
        &self,
        email: &str,
        registration_number: &str,
    ) -> DaoResult<bool> {
        let existing = self
            .base
            .find_one(doc! {
                "$or": [
                    { "email": email },
                    { "registration_number": registration_number },
                ]
            })
            .await?;
        Ok(existing.is_some())
    }

    pub async fn list_active(&self) -> DaoResult<Vec<Ngo>> {
        self.base
            .find_many(doc! { "is_active": true }, Some(doc! { "created_at": -1 }))
            .await
    }

    /// Active NGOs within [`NEARBY_RADIUS_METERS`] of the point, nearest
    /// first. Delegated entirely to the `2dsphere` index via `$near`.
    pub async fn find_nearby(&self, longitude: f64, latitude: f64) -> DaoResult<Vec<Ngo>> {
        self.base
            .find_many(
                doc! {
                    "is_active": true,
                    "location": {
                        "$near": {
                            "$geometry": {
                                "type": "Point",
                                "coordinates": [longitude, latitude],
                            },
                            "$maxDistance": NEARBY_RADIUS_METERS,
                        }
                    }
                },
                None,
            )
            .await
    }

    pub async fn set_active(&self, id: ObjectId, active: bool) -> DaoResult<bool> {
        self.base
            .update_by_id(id, doc! { "$set": { "is_active": active } })
            .await
    }

    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> DaoResult<Vec<Ngo>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.base
            .find_many(doc! { "_id": { "$in": ids.to_vec() } }, None)
            .await
    }
}
