use async_trait::async_trait;

use crate::error::Result;
use crate::models::message::{MessageFromUser, MessageToUser};
use crate::models::user::{UserDetail, UserSummary};

/// Read-side queries over users and their messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All users, projected to their summary fields.
    async fn list_users(&self) -> Result<Vec<UserSummary>>;

    /// Full record for `username`; `Error::NotFound` when no such user exists.
    async fn get_user(&self, username: &str) -> Result<UserDetail>;

    /// Messages whose recipient is `username`, with the sender embedded.
    async fn messages_to(&self, username: &str) -> Result<Vec<MessageFromUser>>;

    /// Messages whose sender is `username`, with the recipient embedded.
    async fn messages_from(&self, username: &str) -> Result<Vec<MessageToUser>>;
}
