use sqlx::PgPool;

pub async fn create_pool(database_url: &str) -> PgPool {
    PgPool::connect(database_url)
        .await
        .expect("Failed to connect to the database")
}

/// The gallery schema is created on startup so a fresh database works
/// without a separate migration step.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS gallery_images (
            id UUID PRIMARY KEY,
            filename TEXT NOT NULL,
            image_data TEXT NOT NULL,
            description TEXT,
            uploaded_at TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
