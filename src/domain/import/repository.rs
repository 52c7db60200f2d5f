use crate::domain::errors::DomainResult;
use crate::domain::import::entity::{Import, ImportId};
use async_trait::async_trait;

#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Consumption is persisted by `ArticleWriteRepository::insert`, in the
    /// same transaction as the article that claims the import.
    async fn find_by_id(&self, id: ImportId) -> DomainResult<Option<Import>>;
}
