use super::ArticleQueryService;
use crate::application::{dto::CommentDto, error::ApplicationResult};

pub struct ListCommentsQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let article = self.find_article(query.slug).await?;
        article
            .comments()
            .iter()
            .map(CommentDto::from_comment)
            .collect()
    }
}
