use bson::{DateTime, doc, oid::ObjectId};
use mongodb::Database;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use ngo_connect_db::models::{GeoPoint, HelpRequest, HelpStatus, HelpType};

use super::base::{BaseDao, DaoError, DaoResult};

pub struct HelpRequestDao {
    pub base: BaseDao<HelpRequest>,
}

impl HelpRequestDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, HelpRequest::COLLECTION),
        }
    }

    pub async fn create(
        &self,
        reported_by: ObjectId,
        help_type: HelpType,
        description: Option<String>,
        image_url: Option<String>,
        location: GeoPoint,
    ) -> DaoResult<HelpRequest> {
        let now = DateTime::now();
        let request = HelpRequest {
            id: None,
            reported_by,
            help_type,
            description,
            image_url,
            location,
            status: HelpStatus::Pending,
            accepted_by_ngo: None,
            accepted_at: None,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&request).await?;
        self.base.find_by_id(id).await
    }

    pub async fn list(&self) -> DaoResult<Vec<HelpRequest>> {
        self.base
            .find_many(doc! {}, Some(doc! { "created_at": -1 }))
            .await
    }

    /// pending -> accepted, recording the NGO and timestamp atomically with
    /// the status change. The status filter makes concurrent accepts lose:
    /// `None` means the request is either missing or no longer pending.
    pub async fn accept(
        &self,
        id: ObjectId,
        ngo_id: ObjectId,
    ) -> DaoResult<Option<HelpRequest>> {
        let now = DateTime::now();
        let opts = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .base
            .collection()
            .find_one_and_update(
                doc! { "_id": id, "status": "pending" },
                doc! {
                    "$set": {
                        "status": "accepted",
                        "accepted_by_ngo": ngo_id,
                        "accepted_at": now,
                        "updated_at": now,
                    }
                },
            )
            .with_options(opts)
            .await
            .map_err(DaoError::Mongo)?;
        Ok(updated)
    }

    /// accepted -> helped, same conditional-update guard as [`Self::accept`].
    pub async fn mark_helped(&self, id: ObjectId) -> DaoResult<Option<HelpRequest>> {
        let opts = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .base
            .collection()
            .find_one_and_update(
                doc! { "_id": id, "status": "accepted" },
                doc! {
                    "$set": {
                        "status": "helped",
                        "updated_at": DateTime::now(),
                    }
                },
            )
            .with_options(opts)
            .await
            .map_err(DaoError::Mongo)?;
        Ok(updated)
    }
}
