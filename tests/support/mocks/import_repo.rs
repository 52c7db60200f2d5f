// tests/support/mocks/import_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::import::{Import, ImportId, ImportRepository};

#[derive(Default)]
pub struct InMemoryImports {
    inner: Mutex<HashMap<i64, Import>>,
}

impl InMemoryImports {
    pub fn with_imports(imports: impl IntoIterator<Item = Import>) -> Self {
        let map = imports.into_iter().map(|i| (i.id.0, i)).collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    /// Same guard as the Postgres claim: flips `imported` only if unset.
    pub fn consume(&self, id: ImportId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(&id.0) {
            Some(import) if !import.imported => {
                import.imported = true;
                Ok(())
            }
            Some(_) => Err(DomainError::Conflict(format!(
                "import {id} was already consumed"
            ))),
            None => Err(DomainError::NotFound(format!("import {id} not found"))),
        }
    }

    pub fn is_imported(&self, id: i64) -> bool {
        self.inner
            .lock()
            .unwrap()
            .get(&id)
            .is_some_and(|i| i.imported)
    }
}

#[async_trait]
impl ImportRepository for InMemoryImports {
    async fn find_by_id(&self, id: ImportId) -> DomainResult<Option<Import>> {
        Ok(self.inner.lock().unwrap().get(&id.0).cloned())
    }
}
