use axum::{
    extract::{Path, State},
    middleware::from_fn,
    response::{IntoResponse, Json},
    routing::{get, MethodRouter},
    Router,
};

use crate::{
    dto::user_dto::{
        MessagesFromResponse, MessagesToResponse, UserDetailResponse, UserListResponse,
    },
    error::Result,
    middleware::auth::{require_correct_user, require_logged_in},
    AppState,
};

/// Routes mounted under `/users`.
///
/// `/` needs any logged-in caller; everything under `/:username` is only
/// visible to that user.
pub fn router() -> Router<AppState> {
    let own_records = Router::new()
        .route("/:username", get(get_user))
        .route("/:username/to", get(messages_to))
        .route("/:username/from", get(messages_from))
        .route_layer(from_fn(require_correct_user));

    Router::new()
        .route("/", list_route())
        .merge(own_records)
}

/// The listing, guarded. Also mounted at `/users/`, which nesting does not reach.
pub fn list_route() -> MethodRouter<AppState> {
    get(list_users).route_layer(from_fn(require_logged_in))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = UserListResponse),
        (status = 401, description = "Caller is not logged in", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler(state = AppState)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.data_source.list_users().await?;
    Ok(Json(UserListResponse { users }))
}

#[utoipa::path(
    get,
    path = "/users/{username}",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User detail", body = UserDetailResponse),
        (status = 401, description = "Caller is not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is a different user", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler(state = AppState)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state.data_source.get_user(&username).await?;
    Ok(Json(UserDetailResponse { user }))
}

#[utoipa::path(
    get,
    path = "/users/{username}/to",
    params(
        ("username" = String, Path, description = "Recipient username")
    ),
    responses(
        (status = 200, description = "Messages received by the user", body = MessagesToResponse),
        (status = 401, description = "Caller is not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is a different user", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler(state = AppState)]
pub async fn messages_to(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let messages = state.data_source.messages_to(&username).await?;
    Ok(Json(MessagesToResponse { messages }))
}

#[utoipa::path(
    get,
    path = "/users/{username}/from",
    params(
        ("username" = String, Path, description = "Sender username")
    ),
    responses(
        (status = 200, description = "Messages sent by the user", body = MessagesFromResponse),
        (status = 401, description = "Caller is not logged in", body = ErrorResponse),
        (status = 403, description = "Caller is a different user", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler(state = AppState)]
pub async fn messages_from(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let messages = state.data_source.messages_from(&username).await?;
    Ok(Json(MessagesFromResponse { messages }))
}
