use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::utils;

#[derive(Deserialize)]
pub struct AdminLogin {
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    access_token: String,
    token_type: String,
}

pub async fn admin_login(
    config: web::Data<AppConfig>,
    login: web::Json<AdminLogin>,
) -> Result<HttpResponse, actix_web::Error> {
    if login.username != config.admin_username || login.password != config.admin_password {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()).into());
    }

    let access_token = utils::jwt::generate_token(&login.username, &config.jwt_secret)
        .map_err(|_| AppError::InternalServerError("Token generation error".to_string()))?;

    info!("Admin {} logged in", login.username);

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
