// tests/support/mocks/user_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use folio_core::domain::errors::DomainResult;
use folio_core::domain::user::{User, UserId, UserRepository, Username};

#[derive(Default)]
pub struct InMemoryUsers {
    inner: Mutex<HashMap<i64, User>>,
}

impl InMemoryUsers {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id.0, u)).collect();
        Self {
            inner: Mutex::new(map),
        }
    }

    /// Simulates a rename done outside this service.
    pub fn rename(&self, id: i64, username: &str) {
        let mut map = self.inner.lock().unwrap();
        if let Some(user) = map.get_mut(&id) {
            user.username = Username::new(username).unwrap();
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().find(|u| &u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }
}
