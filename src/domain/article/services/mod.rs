// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Hands out slugs that no other article owns.
pub struct ArticleSlugService {
    articles: Arc<dyn ArticleReadRepository>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            slugger,
            clock,
        }
    }

    /// Tries the slugified title, then `-1`, `-2`, ... suffixes.
    ///
    /// When `owner` is given, that article's current slug counts as free so a
    /// retitle back to the same text keeps it.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        owner: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.base_for(title);
        let mut suffix = 0u64;
        loop {
            let candidate = if suffix == 0 {
                base.clone()
            } else {
                format!("{base}-{suffix}")
            };
            let slug = ArticleSlug::new(candidate)?;
            if self.is_available(&slug, owner).await? {
                return Ok(slug);
            }
            suffix += 1;
        }
    }

    fn base_for(&self, title: &ArticleTitle) -> String {
        let base = self.slugger.slugify(title.as_str());
        if base.is_empty() {
            // titles of punctuation only
            format!("article-{}", self.clock.now().timestamp())
        } else {
            base
        }
    }

    async fn is_available(&self, slug: &ArticleSlug, owner: Option<ArticleId>) -> DomainResult<bool> {
        Ok(match self.articles.find_by_slug(slug).await? {
            None => true,
            Some(existing) => owner == Some(existing.id()),
        })
    }
}
