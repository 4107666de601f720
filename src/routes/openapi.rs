use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::user_dto::{
    ErrorResponse, MessagesFromResponse, MessagesToResponse, UserDetailResponse, UserListResponse,
};
use crate::models::message::{MessageFromUser, MessageToUser};
use crate::models::user::{UserDetail, UserSummary};
use crate::routes::{health, users};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        users::list_users,
        users::get_user,
        users::messages_to,
        users::messages_from,
    ),
    components(schemas(
        UserSummary,
        UserDetail,
        MessageFromUser,
        MessageToUser,
        UserListResponse,
        UserDetailResponse,
        MessagesToResponse,
        MessagesFromResponse,
        ErrorResponse,
    )),
    modifiers(&BearerAuth),
    tags((name = "users", description = "Users and their messages"))
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
