// src/infrastructure/repositories/postgres_article.rs
use std::collections::HashSet;

use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleContents, ArticleDescription, ArticleId, ArticleReadRepository,
    ArticleSlug, ArticleState, ArticleTitle, ArticleWriteRepository, Comment, CommentBody,
    CommentId, NewArticle, Tag,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::import::ImportId;
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};

const ARTICLE_COLUMNS: &str = "id, author_id, author_name, import_id, title, slug, description, body, version, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    author_name: String,
    import_id: Option<i64>,
    title: String,
    slug: String,
    description: String,
    body: String,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment::persisted(
            CommentId::new(row.id)?,
            ArticleId::new(row.article_id)?,
            UserId::new(row.author_id)?,
            CommentBody::new(row.body),
            row.created_at,
        ))
    }
}

/// Children of an article row, loaded separately.
struct ArticleChildren {
    tags: Vec<String>,
    favorited_by: Vec<i64>,
    comments: Vec<CommentRow>,
}

fn assemble(row: ArticleRow, children: ArticleChildren) -> DomainResult<Article> {
    let tags = children
        .tags
        .into_iter()
        .map(Tag::new)
        .collect::<DomainResult<Vec<_>>>()?;
    let favorited_by = children
        .favorited_by
        .into_iter()
        .map(UserId::new)
        .collect::<DomainResult<HashSet<_>>>()?;
    let comments = children
        .comments
        .into_iter()
        .map(Comment::try_from)
        .collect::<DomainResult<Vec<_>>>()?;

    let contents = ArticleContents::new(
        ArticleTitle::new(row.title)?,
        ArticleSlug::new(row.slug)?,
        ArticleDescription::new(row.description),
        ArticleBody::new(row.body)?,
        tags,
    );

    Ok(Article::from_state(ArticleState {
        id: ArticleId::new(row.id)?,
        author: UserId::new(row.author_id)?,
        author_name: Username::new(row.author_name)?,
        contents,
        favorited_by,
        comments,
        import_id: row.import_id.map(ImportId::new).transpose()?,
        version: row.version,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

async fn load_children(conn: &mut PgConnection, article_id: i64) -> DomainResult<ArticleChildren> {
    let tags = sqlx::query_scalar::<_, String>(
        "SELECT tag FROM article_tags WHERE article_id = $1 ORDER BY tag",
    )
    .bind(article_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    let favorited_by = sqlx::query_scalar::<_, i64>(
        "SELECT user_id FROM article_favorites WHERE article_id = $1",
    )
    .bind(article_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    let comments = sqlx::query_as::<_, CommentRow>(
        "SELECT id, article_id, author_id, body, created_at
         FROM comments WHERE article_id = $1 ORDER BY id",
    )
    .bind(article_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Ok(ArticleChildren {
        tags,
        favorited_by,
        comments,
    })
}

async fn load_article(conn: &mut PgConnection, row: Option<ArticleRow>) -> DomainResult<Option<Article>> {
    let Some(row) = row else {
        return Ok(None);
    };
    let children = load_children(conn, row.id).await?;
    assemble(row, children).map(Some)
}

async fn find_row_by_id(conn: &mut PgConnection, id: i64) -> DomainResult<Option<ArticleRow>> {
    sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)
}

async fn replace_tags(conn: &mut PgConnection, article_id: i64, tags: &[&str]) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if tags.is_empty() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO article_tags (article_id, tag)
         SELECT $1, tag FROM UNNEST($2::text[]) AS t(tag)",
    )
    .bind(article_id)
    .bind(tags)
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

// Dropping the transaction on error rolls the claim back.
async fn claim_import(conn: &mut PgConnection, import_id: ImportId) -> DomainResult<()> {
    let claimed = sqlx::query("UPDATE imports SET imported = TRUE WHERE id = $1 AND imported = FALSE")
        .bind(i64::from(import_id))
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if claimed.rows_affected() == 0 {
        return Err(DomainError::Conflict(format!(
            "import {import_id} was already consumed"
        )));
    }
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            author_name,
            contents,
            import_id,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        if let Some(import_id) = import_id {
            claim_import(&mut tx, import_id).await?;
        }

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (author_id, author_name, import_id, title, slug, description, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(author))
        .bind(author_name.as_str())
        .bind(import_id.map(i64::from))
        .bind(contents.title().as_str())
        .bind(contents.slug().as_str())
        .bind(contents.description().as_str())
        .bind(contents.body().as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let tags: Vec<&str> = contents.tags().iter().map(Tag::as_str).collect();
        replace_tags(&mut tx, row.id, &tags).await?;

        let article = load_article(&mut tx, Some(row))
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(article)
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let article_id = i64::from(article.id());

        let updated = sqlx::query(
            "UPDATE articles
             SET author_name = $1, title = $2, slug = $3, description = $4, body = $5,
                 updated_at = $6, version = version + 1
             WHERE id = $7 AND version = $8",
        )
        .bind(article.author_name().as_str())
        .bind(article.contents().title().as_str())
        .bind(article.contents().slug().as_str())
        .bind(article.contents().description().as_str())
        .bind(article.contents().body().as_str())
        .bind(article.updated_at())
        .bind(article_id)
        .bind(article.version())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::Conflict(
                "article was modified concurrently, please retry".into(),
            ));
        }

        let tags: Vec<&str> = article.contents().tags().iter().map(Tag::as_str).collect();
        replace_tags(&mut tx, article_id, &tags).await?;

        let favorited_by: Vec<i64> = article.favorited_by().iter().map(|id| id.0).collect();
        sqlx::query(
            "DELETE FROM article_favorites
             WHERE article_id = $1 AND NOT (user_id = ANY($2))",
        )
        .bind(article_id)
        .bind(&favorited_by)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        sqlx::query(
            "INSERT INTO article_favorites (article_id, user_id)
             SELECT $1, user_id FROM UNNEST($2::bigint[]) AS f(user_id)
             ON CONFLICT DO NOTHING",
        )
        .bind(article_id)
        .bind(&favorited_by)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let kept: Vec<i64> = article
            .comments()
            .iter()
            .filter_map(Comment::id)
            .map(i64::from)
            .collect();
        sqlx::query("DELETE FROM comments WHERE article_id = $1 AND NOT (id = ANY($2))")
            .bind(article_id)
            .bind(&kept)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        for draft in article.comments().iter().filter(|c| !c.is_persisted()) {
            sqlx::query(
                "INSERT INTO comments (article_id, author_id, body, created_at)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(article_id)
            .bind(i64::from(draft.author()))
            .bind(draft.body().as_str())
            .bind(draft.created_at())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        let row = find_row_by_id(&mut tx, article_id).await?;
        let saved = load_article(&mut tx, row)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(saved)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn sync_author_name(&self, author: UserId, name: &Username) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE articles SET author_name = $1, version = version + 1
             WHERE author_id = $2 AND author_name <> $1",
        )
        .bind(name.as_str())
        .bind(i64::from(author))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;
        load_article(&mut conn, row).await
    }
}
