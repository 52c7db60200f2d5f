use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{CommentBody, CommentId},
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

impl ArticleCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let mut article = self.load_by_slug(command.slug).await?;
        article.add_comment(actor.id, CommentBody::new(command.body), self.clock.now());

        let saved = self.write_repo.save(article).await?;

        // Saves are serialised by the version check, so the newest comment by
        // the actor is the one just added.
        let comment = saved
            .comments()
            .iter()
            .rev()
            .find(|comment| comment.author() == actor.id)
            .ok_or_else(|| ApplicationError::infrastructure("saved comment is missing"))?;

        tracing::info!(
            article.slug = %saved.contents().slug(),
            user.id = %actor.id,
            "comment added"
        );
        CommentDto::from_comment(comment)
    }

    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let comment_id = CommentId::new(command.comment_id)?;
        let mut article = self.load_by_slug(command.slug).await?;

        if let Err(err) =
            article.remove_comment_by_user(actor.id, comment_id, self.deletion_policy)
        {
            tracing::warn!(
                user.id = %actor.id,
                comment.id = %comment_id,
                policy = %self.deletion_policy,
                error = %err,
                "comment deletion rejected"
            );
            return Err(err.into());
        }

        self.write_repo.save(article).await?;
        Ok(())
    }
}
