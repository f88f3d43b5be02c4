use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use futures_util::TryStreamExt;
use log::{error, info};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::gallery::GalleryImage;
use crate::utils;

pub async fn get_gallery(pool: web::Data<PgPool>) -> HttpResponse {
    let images = sqlx::query_as::<_, GalleryImage>(
        "SELECT id, filename, image_data, description, uploaded_at \
         FROM gallery_images ORDER BY uploaded_at LIMIT 100",
    )
    .fetch_all(&**pool)
    .await;

    match images {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(err) => {
            // The public gallery page prefers an empty list over an error.
            error!("Gallery listing failed: {}", err);
            HttpResponse::Ok().json(Vec::<GalleryImage>::new())
        }
    }
}

pub async fn upload_image(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, actix_web::Error> {
    let token = req.headers().get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.split_whitespace().nth(1));

    if let Some(token) = token {
        utils::jwt::validate_token(token, &config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

        let mut filename: Option<String> = None;
        let mut description = String::new();
        let mut content: Vec<u8> = Vec::new();

        while let Some(mut field) = payload.try_next().await? {
            let field_name = field.name().to_string();
            match field_name.as_str() {
                "file" => {
                    filename = field.content_disposition().get_filename().map(String::from);
                    while let Some(chunk) = field.try_next().await? {
                        content.extend_from_slice(&chunk);
                    }
                }
                "description" => {
                    let mut buf = Vec::new();
                    while let Some(chunk) = field.try_next().await? {
                        buf.extend_from_slice(&chunk);
                    }
                    description = String::from_utf8_lossy(&buf).into_owned();
                }
                _ => {
                    // Drain unknown fields
                    while field.try_next().await?.is_some() {}
                }
            }
        }

        if content.is_empty() {
            return Err(AppError::BadRequest("No file provided".to_string()).into());
        }

        let file_type = infer::get(&content)
            .ok_or_else(|| AppError::BadRequest("Unrecognized file type".to_string()))?;
        if !file_type.mime_type().starts_with("image/") {
            return Err(AppError::BadRequest("Only image files are allowed".to_string()).into());
        }

        let id = Uuid::new_v4();
        let filename = filename.unwrap_or_else(|| format!("{}.{}", id, file_type.extension()));
        let image_data = BASE64.encode(&content);
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO gallery_images (id, filename, image_data, description, uploaded_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(&filename)
        .bind(&image_data)
        .bind(&description)
        .bind(now)
        .execute(&**pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

        info!("Uploaded gallery image {} ({})", id, filename);

        Ok(HttpResponse::Ok().json(json!({
            "message": "Image uploaded successfully",
            "id": id,
        })))
    } else {
        Err(AppError::Unauthorized("Missing token".to_string()).into())
    }
}

pub async fn delete_image(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    image_id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let token = req.headers().get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.split_whitespace().nth(1));

    if let Some(token) = token {
        utils::jwt::validate_token(token, &config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

        // A malformed id cannot match any stored image.
        let image_id = Uuid::parse_str(&image_id.into_inner())
            .map_err(|_| AppError::NotFound("Image not found".to_string()))?;

        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(image_id)
            .execute(&**pool)
            .await
            .map_err(|err| AppError::DatabaseError(err.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Image not found".to_string()).into());
        }

        info!("Deleted gallery image {}", image_id);

        Ok(HttpResponse::Ok().json(json!({
            "message": "Image deleted successfully",
        })))
    } else {
        Err(AppError::Unauthorized("Missing token".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use sqlx::postgres::PgPoolOptions;

    // A lazily-connected pool: never touches the network as long as the
    // handler rejects the request before its first query.
    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap()
    }

    #[actix_web::test]
    async fn test_upload_without_token_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(web::Data::new(AppConfig::for_tests()))
                .service(web::resource("/api/gallery").route(web::post().to(upload_image))),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/gallery").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_upload_with_garbage_token_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(web::Data::new(AppConfig::for_tests()))
                .service(web::resource("/api/gallery").route(web::post().to(upload_image))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/gallery")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_delete_without_token_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(web::Data::new(AppConfig::for_tests()))
                .service(web::resource("/api/gallery/{id}").route(web::delete().to(delete_image))),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/gallery/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_delete_malformed_id_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data(web::Data::new(AppConfig::for_tests()))
                .service(web::resource("/api/gallery/{id}").route(web::delete().to(delete_image))),
        )
        .await;

        let token = utils::jwt::generate_token("admin", "test-secret").unwrap();
        let req = test::TestRequest::delete()
            .uri("/api/gallery/no-such-image")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
