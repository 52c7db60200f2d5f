use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

pub struct GetArticleQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// `favorited` in the result is computed for `viewer`; anonymous viewers see `false`.
    pub async fn get_article(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_article(query.slug).await?;
        Ok(article.view_for(viewer.map(|user| user.id)).into())
    }
}
