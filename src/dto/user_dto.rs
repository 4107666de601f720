use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::message::{MessageFromUser, MessageToUser};
use crate::models::user::{UserDetail, UserSummary};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetailResponse {
    pub user: UserDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessagesToResponse {
    pub messages: Vec<MessageFromUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessagesFromResponse {
    pub messages: Vec<MessageToUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
