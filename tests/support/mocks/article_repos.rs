// tests/support/mocks/article_repos.rs
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleState, ArticleWriteRepository,
    Comment, CommentId, NewArticle,
};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::user::{UserId, Username};

use super::import_repo::InMemoryImports;

struct Inner {
    articles: BTreeMap<i64, Article>,
    next_article_id: i64,
    next_comment_id: i64,
}

/// Article store that mimics the Postgres repository: versioned saves,
/// unique slugs and `(author, title)`, ids assigned to new comments, and
/// imports claimed together with the insert.
///
/// Implements both the read and write side so one instance backs a service.
pub struct InMemoryArticles {
    inner: Mutex<Inner>,
    imports: Option<Arc<InMemoryImports>>,
}

impl Default for InMemoryArticles {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                articles: BTreeMap::new(),
                next_article_id: 1,
                next_comment_id: 1,
            }),
            imports: None,
        }
    }
}

impl InMemoryArticles {
    /// Inserts with an import id consume it from `imports`.
    pub fn linked_to(imports: Arc<InMemoryImports>) -> Self {
        Self {
            imports: Some(imports),
            ..Self::default()
        }
    }

    /// Stores `article` as-is, bypassing uniqueness checks.
    pub fn seed(&self, article: Article) {
        let mut inner = self.inner.lock().unwrap();
        let id = article.id().0;
        for comment in article.comments() {
            if let Some(cid) = comment.id() {
                inner.next_comment_id = inner.next_comment_id.max(cid.0 + 1);
            }
        }
        inner.next_article_id = inner.next_article_id.max(id + 1);
        inner.articles.insert(id, article);
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<Article> {
        let inner = self.inner.lock().unwrap();
        inner
            .articles
            .values()
            .find(|a| a.contents().slug().as_str() == slug)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }

}

fn check_unique(
    articles: &BTreeMap<i64, Article>,
    id: Option<i64>,
    author: UserId,
    slug: &str,
    title: &str,
) -> DomainResult<()> {
    for (other_id, other) in articles {
        if Some(*other_id) == id {
            continue;
        }
        if other.contents().slug().as_str() == slug {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if other.author() == author && other.contents().title().as_str() == title {
            return Err(DomainError::Conflict(
                "author already has an article with this title".into(),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        check_unique(
            &inner.articles,
            None,
            article.author,
            article.contents.slug().as_str(),
            article.contents.title().as_str(),
        )?;
        if let Some(import_id) = article.import_id {
            if inner.articles.values().any(|a| a.import_id() == Some(import_id)) {
                return Err(DomainError::Conflict("import was already consumed".into()));
            }
            if let Some(imports) = &self.imports {
                imports.consume(import_id)?;
            }
        }

        let id = inner.next_article_id;
        inner.next_article_id += 1;

        let created = Article::from_state(ArticleState {
            id: ArticleId::new(id)?,
            author: article.author,
            author_name: article.author_name,
            contents: article.contents,
            favorited_by: HashSet::new(),
            comments: Vec::new(),
            import_id: article.import_id,
            version: 0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        });
        inner.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let id = article.id().0;
        let stored_version = inner
            .articles
            .get(&id)
            .map(Article::version)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if stored_version != article.version() {
            return Err(DomainError::Conflict(
                "article was modified concurrently, please retry".into(),
            ));
        }
        check_unique(
            &inner.articles,
            Some(id),
            article.author(),
            article.contents().slug().as_str(),
            article.contents().title().as_str(),
        )?;

        let mut state = article.into_state();
        let mut comments = Vec::with_capacity(state.comments.len());
        for comment in state.comments {
            if comment.is_persisted() {
                comments.push(comment);
                continue;
            }
            let comment_id = CommentId::new(inner.next_comment_id)?;
            inner.next_comment_id += 1;
            comments.push(Comment::persisted(
                comment_id,
                state.id,
                comment.author(),
                comment.body().clone(),
                comment.created_at(),
            ));
        }
        state.comments = comments;
        state.version += 1;

        let saved = Article::from_state(state);
        inner.articles.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .articles
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn sync_author_name(&self, author: UserId, name: &Username) -> DomainResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        let mut changed = 0;
        for article in inner.articles.values_mut() {
            if article.author() != author || article.author_name() == name {
                continue;
            }
            let mut state = article.clone().into_state();
            state.author_name = name.clone();
            state.version += 1;
            *article = Article::from_state(state);
            changed += 1;
        }
        Ok(changed)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.get_by_slug(slug.as_str()))
    }
}

/// Read side pinned to earlier snapshots, so a command works on an article
/// that someone else has saved since it was loaded.
pub struct FrozenArticles(pub Vec<Article>);

#[async_trait]
impl ArticleReadRepository for FrozenArticles {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .0
            .iter()
            .find(|a| a.contents().slug() == slug)
            .cloned())
    }
}
