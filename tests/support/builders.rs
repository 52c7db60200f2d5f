// tests/support/builders.rs
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use folio_core::domain::article::*;
use folio_core::domain::import::{Import, ImportId};
use folio_core::domain::user::{User, UserId, Username};

use super::mocks::fixed_now;

pub fn user(id: i64, username: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        bio: Some(format!("I am {username}")),
        image: None,
        created_at: fixed_now(),
    }
}

pub fn import(id: i64, owner: i64, imported: bool) -> Import {
    Import {
        id: ImportId::new(id).unwrap(),
        user_id: UserId::new(owner).unwrap(),
        created_at: fixed_now(),
        content: "# Imported\n\nbody".into(),
        imported,
    }
}

pub struct ArticleBuilder {
    id: i64,
    author_id: i64,
    author_name: String,
    title: String,
    slug: Option<String>,
    body: String,
    tags: Vec<String>,
    favorited_by: Vec<i64>,
    comments: Vec<(i64, i64, String)>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            author_id: 1,
            author_name: "alice".into(),
            title: "Hello".into(),
            slug: None,
            body: "Test body".into(),
            tags: Vec::new(),
            favorited_by: Vec::new(),
            comments: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, id: i64, name: &str) -> Self {
        self.author_id = id;
        self.author_name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn favorited_by(mut self, user_id: i64) -> Self {
        self.favorited_by.push(user_id);
        self
    }

    /// Adds an already persisted comment.
    pub fn comment(mut self, id: i64, author_id: i64, body: impl Into<String>) -> Self {
        self.comments.push((id, author_id, body.into()));
        self
    }

    pub fn build(self) -> Article {
        let article_id = ArticleId::new(self.id).unwrap();
        let slug = self
            .slug
            .unwrap_or_else(|| self.title.to_lowercase().replace(' ', "-"));
        let contents = ArticleContents::new(
            ArticleTitle::new(self.title).unwrap(),
            ArticleSlug::new(slug).unwrap(),
            ArticleDescription::new("A description"),
            ArticleBody::new(self.body).unwrap(),
            self.tags.into_iter().map(|t| Tag::new(t).unwrap()),
        );
        let comments = self
            .comments
            .into_iter()
            .map(|(id, author, body)| {
                Comment::persisted(
                    CommentId::new(id).unwrap(),
                    article_id,
                    UserId::new(author).unwrap(),
                    CommentBody::new(body),
                    self.created_at,
                )
            })
            .collect();

        Article::from_state(ArticleState {
            id: article_id,
            author: UserId::new(self.author_id).unwrap(),
            author_name: Username::new(self.author_name).unwrap(),
            contents,
            favorited_by: self
                .favorited_by
                .into_iter()
                .map(|id| UserId::new(id).unwrap())
                .collect::<HashSet<_>>(),
            comments,
            import_id: None,
            version: 0,
            created_at: self.created_at,
            updated_at: self.created_at,
        })
    }
}
