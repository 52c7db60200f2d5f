use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub author_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl CommentDto {
    /// Fails for comments that have not been saved yet.
    pub fn from_comment(comment: &Comment) -> ApplicationResult<Self> {
        let Some(id) = comment.id() else {
            return Err(ApplicationError::infrastructure(
                "comment has not been persisted",
            ));
        };

        Ok(Self {
            id: id.into(),
            body: comment.body().as_str().to_string(),
            author_id: comment.author().into(),
            created_at: comment.created_at(),
        })
    }
}
