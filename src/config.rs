use std::env;

/// Runtime configuration, loaded once at startup and passed into handlers
/// as `web::Data<AppConfig>`.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password: String,
    pub chat_api_key: Option<String>,
    pub chat_api_url: String,
    pub chat_model: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        if jwt_secret.is_empty() {
            panic!("JWT_SECRET cannot be empty");
        }

        AppConfig {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret,
            admin_username: env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set"),
            admin_password: env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
            chat_api_key: env::var("CHAT_API_KEY").ok().filter(|k| !k.is_empty()),
            chat_api_url: env::var("CHAT_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".to_string()),
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// Config for handler tests: no database, no chat provider.
    pub fn for_tests() -> Self {
        AppConfig {
            database_url: "postgres://localhost/unused".to_string(),
            jwt_secret: "test-secret".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "beauty123".to_string(),
            chat_api_key: None,
            chat_api_url: "https://api.openai.com".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }
}
