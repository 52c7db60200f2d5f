// src/infrastructure/repositories/postgres_import.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::import::{Import, ImportId, ImportRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresImportRepository {
    pool: PgPool,
}

impl PostgresImportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ImportRow {
    id: i64,
    user_id: i64,
    content: String,
    imported: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ImportRow> for Import {
    type Error = DomainError;

    fn try_from(row: ImportRow) -> Result<Self, Self::Error> {
        Ok(Import {
            id: ImportId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            created_at: row.created_at,
            content: row.content,
            imported: row.imported,
        })
    }
}

#[async_trait]
impl ImportRepository for PostgresImportRepository {
    async fn find_by_id(&self, id: ImportId) -> DomainResult<Option<Import>> {
        let row = sqlx::query_as::<_, ImportRow>(
            "SELECT id, user_id, content, imported, created_at FROM imports WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Import::try_from).transpose()
    }
}
