use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

pub struct FavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn favorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_by_slug(command.slug).await?;
        let count = article.favorite(actor.id).favorited_count();
        tracing::debug!(user.id = %actor.id, favorites = count, "article favorited");

        let saved = self.write_repo.save(article).await?;
        Ok(saved.view_for(Some(actor.id)).into())
    }

    pub async fn unfavorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_by_slug(command.slug).await?;
        let count = article.unfavorite(actor.id).favorited_count();
        tracing::debug!(user.id = %actor.id, favorites = count, "article unfavorited");

        let saved = self.write_repo.save(article).await?;
        Ok(saved.view_for(Some(actor.id)).into())
    }
}
