use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportId(pub i64);

impl ImportId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("import id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ImportId> for i64 {
    fn from(value: ImportId) -> Self {
        value.0
    }
}

impl fmt::Display for ImportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw article content staged by an external import job.
#[derive(Debug, Clone)]
pub struct Import {
    pub id: ImportId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub imported: bool,
}

impl Import {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == user
    }

    pub fn mark_imported(&mut self) -> DomainResult<()> {
        if self.imported {
            return Err(DomainError::Conflict(format!(
                "import {} was already consumed",
                self.id
            )));
        }
        self.imported = true;
        Ok(())
    }
}
