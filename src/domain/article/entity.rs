// src/domain/article/entity.rs
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::domain::article::comment::Comment;
use crate::domain::article::contents::{ArticleContents, ArticleContentsPatch};
use crate::domain::article::specifications::{
    CanDeleteCommentSpec, CanModifyArticleSpec, CommentDeletionPolicy,
};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, CommentBody, CommentId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::import::ImportId;
use crate::domain::user::{User, UserId, Username};

/// Article aggregate root.
///
/// Owns its contents, the set of users who favorited it and its comments.
/// Equality and hashing use the business key `(author, title)`; use
/// [`Article::same_record`] to compare storage identity.
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    author: UserId,
    author_name: Username,
    contents: ArticleContents,
    favorited_by: HashSet<UserId>,
    comments: Vec<Comment>,
    import_id: Option<ImportId>,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Flat representation used by repositories to load and store an [`Article`].
#[derive(Debug, Clone)]
pub struct ArticleState {
    pub id: ArticleId,
    pub author: UserId,
    pub author_name: Username,
    pub contents: ArticleContents,
    pub favorited_by: HashSet<UserId>,
    pub comments: Vec<Comment>,
    pub import_id: Option<ImportId>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleKey<'a> {
    pub author: UserId,
    pub title: &'a ArticleTitle,
}

impl Article {
    pub fn from_state(state: ArticleState) -> Self {
        let ArticleState {
            id,
            author,
            author_name,
            contents,
            favorited_by,
            comments,
            import_id,
            version,
            created_at,
            updated_at,
        } = state;

        Self {
            id,
            author,
            author_name,
            contents,
            favorited_by,
            comments,
            import_id,
            version,
            created_at,
            updated_at,
        }
    }

    pub fn into_state(self) -> ArticleState {
        ArticleState {
            id: self.id,
            author: self.author,
            author_name: self.author_name,
            contents: self.contents,
            favorited_by: self.favorited_by,
            comments: self.comments,
            import_id: self.import_id,
            version: self.version,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn author_name(&self) -> &Username {
        &self.author_name
    }

    pub fn contents(&self) -> &ArticleContents {
        &self.contents
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn favorited_by(&self) -> &HashSet<UserId> {
        &self.favorited_by
    }

    pub fn import_id(&self) -> Option<ImportId> {
        self.import_id
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn business_key(&self) -> ArticleKey<'_> {
        ArticleKey {
            author: self.author,
            title: self.contents.title(),
        }
    }

    pub fn same_record(&self, other: &Article) -> bool {
        self.id == other.id
    }

    pub fn favorite(&mut self, user: UserId) -> ArticleView<'_> {
        self.favorited_by.insert(user);
        ArticleView::new(self, Some(user))
    }

    pub fn unfavorite(&mut self, user: UserId) -> ArticleView<'_> {
        self.favorited_by.remove(&user);
        ArticleView::new(self, Some(user))
    }

    pub fn is_favorited_by(&self, user: UserId) -> bool {
        self.favorited_by.contains(&user)
    }

    pub fn favorited_count(&self) -> usize {
        self.favorited_by.len()
    }

    /// Binds the article to the viewer of the current request.
    pub fn view_for(&self, viewer: Option<UserId>) -> ArticleView<'_> {
        ArticleView::new(self, viewer)
    }

    pub fn add_comment(
        &mut self,
        author: UserId,
        body: CommentBody,
        now: DateTime<Utc>,
    ) -> &Comment {
        self.comments.push(Comment::draft(self.id, author, body, now));
        let last = self.comments.len() - 1;
        &self.comments[last]
    }

    /// Detaches the comment with `comment_id` if `user` passes `policy`.
    ///
    /// The comment list is left untouched on any error.
    pub fn remove_comment_by_user(
        &mut self,
        user: UserId,
        comment_id: CommentId,
        policy: CommentDeletionPolicy,
    ) -> DomainResult<Comment> {
        let position = self
            .comments
            .iter()
            .position(|comment| comment.id() == Some(comment_id))
            .ok_or_else(|| DomainError::NotFound(format!("comment {comment_id} not found")))?;

        let spec = CanDeleteCommentSpec::new(policy, self.author, &self.comments[position], user);
        if !spec.is_satisfied() {
            return Err(DomainError::Forbidden(
                "not authorized to delete comment".into(),
            ));
        }

        Ok(self.comments.remove(position))
    }

    pub fn update_contents(
        &mut self,
        actor: UserId,
        patch: ArticleContentsPatch,
    ) -> DomainResult<()> {
        if !CanModifyArticleSpec::new(self.author, actor).is_satisfied() {
            return Err(DomainError::Forbidden(
                "only the author may update this article".into(),
            ));
        }
        self.contents.apply(patch);
        Ok(())
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.business_key() == other.business_key()
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.business_key().hash(state);
    }
}

/// An article seen by one particular viewer.
#[derive(Debug, Clone, Copy)]
pub struct ArticleView<'a> {
    article: &'a Article,
    viewer: Option<UserId>,
}

impl<'a> ArticleView<'a> {
    pub fn new(article: &'a Article, viewer: Option<UserId>) -> Self {
        Self { article, viewer }
    }

    pub fn article(&self) -> &'a Article {
        self.article
    }

    pub fn viewer(&self) -> Option<UserId> {
        self.viewer
    }

    pub fn favorited(&self) -> bool {
        self.viewer
            .is_some_and(|viewer| self.article.is_favorited_by(viewer))
    }

    pub fn favorited_count(&self) -> usize {
        self.article.favorited_count()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: UserId,
    pub author_name: Username,
    pub contents: ArticleContents,
    pub import_id: Option<ImportId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(author: &User, contents: ArticleContents, now: DateTime<Utc>) -> Self {
        Self {
            author: author.id,
            author_name: author.username.clone(),
            contents,
            import_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_import(mut self, import_id: ImportId) -> Self {
        self.import_id = Some(import_id);
        self
    }
}
