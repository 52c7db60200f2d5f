// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::CanModifyArticleSpec,
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_by_slug(command.slug).await?;

        if !CanModifyArticleSpec::new(article.author(), actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may delete this article",
            ));
        }

        self.write_repo.delete(article.id()).await?;
        tracing::info!(article.slug = %article.contents().slug(), user.id = %actor.id, "article deleted");
        Ok(())
    }
}
