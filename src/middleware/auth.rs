use axum::{
    extract::{Path, Query, Request, State},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    utils::token::decode_token,
    AppState,
};

/// Caller identity carried by a verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenQuery {
    #[serde(rename = "_token")]
    token: Option<String>,
}

fn bearer_token(req: &Request) -> Option<String> {
    if let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) {
        let token = auth_header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());
        if let Some(token) = token {
            return Some(token.to_string());
        }
    }

    Query::<TokenQuery>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(query)| query.token)
        .filter(|token| !token.is_empty())
}

/// Attaches [`Claims`] to the request when it carries a valid token.
///
/// Never rejects: a missing or invalid token simply leaves the request
/// anonymous, and the route guards decide what anonymous callers may do.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(&req) {
        match decode_token(&state.config, &token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(err) => tracing::debug!(error = %err, "ignoring invalid token"),
        }
    }
    next.run(req).await
}

pub fn ensure_logged_in(identity: Option<&Claims>) -> Result<&Claims> {
    identity.ok_or_else(|| Error::Unauthorized("Unauthorized".to_string()))
}

/// Passes only when the caller is logged in as `username`.
pub fn ensure_correct_user<'a>(identity: Option<&'a Claims>, username: &str) -> Result<&'a Claims> {
    let claims = ensure_logged_in(identity)?;
    if claims.username == username {
        Ok(claims)
    } else {
        Err(Error::Forbidden("Forbidden".to_string()))
    }
}

pub async fn require_logged_in(req: Request, next: Next) -> Result<Response> {
    if let Err(err) = ensure_logged_in(req.extensions().get::<Claims>()) {
        tracing::debug!(path = %req.uri().path(), "rejected anonymous caller");
        return Err(err);
    }
    Ok(next.run(req).await)
}

pub async fn require_correct_user(
    Path(username): Path<String>,
    req: Request,
    next: Next,
) -> Result<Response> {
    if let Err(err) = ensure_correct_user(req.extensions().get::<Claims>(), &username) {
        tracing::debug!(%username, "rejected caller for user resource");
        return Err(err);
    }
    Ok(next.run(req).await)
}
