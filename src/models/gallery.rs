use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A gallery record as stored and as served by `GET /api/gallery`.
/// `image_data` holds the base64-encoded file content.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct GalleryImage {
    pub id: Uuid,
    pub filename: String,
    pub image_data: String,
    pub description: Option<String>,
    pub uploaded_at: chrono::DateTime<Utc>,
}
