use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::UserId,
};

/// Re-copies a user's current name onto the articles they wrote.
pub struct SyncAuthorNameCommand {
    pub author_id: i64,
}

impl ArticleCommandService {
    pub async fn sync_author_name(&self, command: SyncAuthorNameCommand) -> ApplicationResult<u64> {
        let author_id = UserId::new(command.author_id)?;
        let author = self
            .user_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let updated = self
            .write_repo
            .sync_author_name(author.id, &author.username)
            .await?;
        tracing::info!(user.id = %author.id, articles = updated, "author name synchronised");
        Ok(updated)
    }
}
