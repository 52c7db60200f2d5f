use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleReadRepository, ArticleSlug},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) async fn find_article(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
