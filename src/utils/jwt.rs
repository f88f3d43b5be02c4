use chrono::Utc;
use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey};
use serde::{Deserialize, Serialize};

/// Token failures surfaced by the verification path. Both map to a 401 at the
/// HTTP boundary, but a payload that carries no subject is reported
/// separately from a bad signature or an expired token.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    Invalid,
    MissingSubject,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>, // Admin username
    pub iat: usize,          // Issued-at timestamp
    pub exp: usize,          // Expiration timestamp
}

const TOKEN_LIFETIME_HOURS: i64 = 24;

pub fn generate_token(subject: &str, secret: &str) -> Result<String, AuthError> {
    let issued_at = Utc::now();
    let expiration = issued_at
        .checked_add_signed(chrono::Duration::hours(TOKEN_LIFETIME_HOURS))
        .ok_or(AuthError::Invalid)?;

    let claims = Claims {
        sub: Some(subject.to_string()),
        iat: issued_at.timestamp() as usize,
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|_| AuthError::Invalid)
}

pub fn validate_token(token: &str, secret: &str) -> Result<String, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(jsonwebtoken::Algorithm::HS256),
    )
    .map_err(|_| AuthError::Invalid)?;

    match data.claims.sub {
        Some(sub) if !sub.is_empty() => Ok(sub),
        _ => Err(AuthError::MissingSubject),
    }
}
