use crate::domain::article::value_objects::{ArticleId, CommentBody, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A comment owned by exactly one article.
///
/// `id` stays `None` until the owning article is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: Option<CommentId>,
    article_id: Option<ArticleId>,
    author: UserId,
    body: CommentBody,
    created_at: DateTime<Utc>,
}

impl Comment {
    pub(super) fn draft(
        article_id: ArticleId,
        author: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            article_id: Some(article_id),
            author,
            body,
            created_at,
        }
    }

    /// Rebuilds a stored comment. Used by repositories only.
    pub fn persisted(
        id: CommentId,
        article_id: ArticleId,
        author: UserId,
        body: CommentBody,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            article_id: Some(article_id),
            author,
            body,
            created_at,
        }
    }

    pub fn id(&self) -> Option<CommentId> {
        self.id
    }

    pub fn article_id(&self) -> Option<ArticleId> {
        self.article_id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn body(&self) -> &CommentBody {
        &self.body
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
