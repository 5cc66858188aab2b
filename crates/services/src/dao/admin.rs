use bson::{DateTime, doc};
use mongodb::Database;
use ngo_connect_db::models::Admin;

use super::base::{BaseDao, DaoError, DaoResult};

pub struct AdminDao {
    pub base: BaseDao<Admin>,
}

impl AdminDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Admin::COLLECTION),
        }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        phone: String,
    ) -> DaoResult<Admin> {
        let now = DateTime::now();
        let admin = Admin {
            id: None,
            name,
            email,
            password_hash: Some(password_hash),
            phone,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&admin).await?;
        self.base.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Admin> {
        self.base
            .find_one(doc! { "email": email })
            .await?
            .ok_or(DaoError::NotFound)
    }

    pub async fn exists_by_email(&self, email: &str) -> DaoResult<bool> {
        Ok(self.base.find_one(doc! { "email": email }).await?.is_some())
    }
}
