use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::Config;
use crate::error::Result;
use crate::middleware::auth::Claims;

/// Signs an HS256 token for `username`, valid for the configured TTL.
pub fn issue_token(config: &Config, username: &str) -> Result<String> {
    let iat = Utc::now().timestamp().max(0) as u64;
    let claims = Claims {
        username: username.to_string(),
        iat,
        exp: iat.saturating_add(config.token_ttl_secs),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn decode_token(config: &Config, token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
