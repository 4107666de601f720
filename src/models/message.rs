use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::user::UserSummary;

/// A message received by a user, carrying its sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageFromUser {
    pub id: i32,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserSummary,
}

/// A message sent by a user, carrying its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageToUser {
    pub id: i32,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub to_user: UserSummary,
}

/// Flat row of a message joined with its counterpart user.
#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: i32,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl MessageRow {
    fn split(self) -> (i32, String, DateTime<Utc>, Option<DateTime<Utc>>, UserSummary) {
        let user = UserSummary {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
        };
        (self.id, self.body, self.sent_at, self.read_at, user)
    }
}

impl From<MessageRow> for MessageFromUser {
    fn from(value: MessageRow) -> Self {
        let (id, body, sent_at, read_at, from_user) = value.split();
        Self {
            id,
            body,
            sent_at,
            read_at,
            from_user,
        }
    }
}

impl From<MessageRow> for MessageToUser {
    fn from(value: MessageRow) -> Self {
        let (id, body, sent_at, read_at, to_user) = value.split();
        Self {
            id,
            body,
            sent_at,
            read_at,
            to_user,
        }
    }
}
