// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
            CommentDeletionPolicy, services::ArticleSlugService,
        },
        import::ImportRepository,
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) import_repo: Arc<dyn ImportRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) deletion_policy: CommentDeletionPolicy,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        import_repo: Arc<dyn ImportRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
        deletion_policy: CommentDeletionPolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            import_repo,
            slug_service,
            clock,
            deletion_policy,
        }
    }

    pub fn deletion_policy(&self) -> CommentDeletionPolicy {
        self.deletion_policy
    }

    pub(super) async fn load_by_slug(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
