// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{security::TokenManager, time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, profiles::ProfileQueryService},
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, CommentDeletionPolicy,
            services::ArticleSlugService,
        },
        import::ImportRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        import_repo: Arc<dyn ImportRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        deletion_policy: CommentDeletionPolicy,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&import_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            deletion_policy,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_commands,
            article_queries,
            profile_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
