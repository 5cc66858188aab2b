use mongodb::{Database, IndexModel, options::IndexOptions};
use tracing::info;

pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    // Users
    create_indexes(
        db,
        "users",
        vec![index_unique(bson::doc! { "email": 1 })],
    )
    .await?;

    // Admins
    create_indexes(
        db,
        "admins",
        vec![index_unique(bson::doc! { "email": 1 })],
    )
    .await?;

    // NGOs
    create_indexes(
        db,
        "ngos",
        vec![
            index_unique(bson::doc! { "email": 1 }),
            index_unique(bson::doc! { "registration_number": 1 }),
            index(bson::doc! { "location": "2dsphere" }),
            index(bson::doc! { "is_active": 1, "created_at": -1 }),
        ],
    )
    .await?;

    // Help Requests
    create_indexes(
        db,
        "help_requests",
        vec![
            index(bson::doc! { "location": "2dsphere" }),
            index(bson::doc! { "status": 1, "created_at": -1 }),
            index(bson::doc! { "reported_by": 1, "created_at": -1 }),
        ],
    )
    .await?;

    info!("All indexes ensured");
    Ok(())
}

fn index(keys: bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

fn index_unique(keys: bson::Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

async fn create_indexes(
    db: &Database,
    collection: &str,
    indexes: Vec<IndexModel>,
) -> Result<(), mongodb::error::Error> {
    db.collection::<bson::Document>(collection)
        .create_indexes(indexes)
        .await?;
    info!(collection, "Indexes created");
    Ok(())
}
