use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Persists the whole aggregate in one transaction and returns it reloaded.
    ///
    /// Fails with `Conflict` when the stored version no longer matches
    /// `article.version()`.
    async fn save(&self, article: Article) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Rewrites the denormalised author name on every article by `author`.
    async fn sync_author_name(&self, author: UserId, name: &Username) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
}
