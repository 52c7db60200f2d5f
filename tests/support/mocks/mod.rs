// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod import_repo;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use article_repos::{FrozenArticles, InMemoryArticles};
pub use import_repo::InMemoryImports;
pub use security::{ALICE_TOKEN, BOB_TOKEN, CAROL_TOKEN, DummyTokenManager, EXPIRED_TOKEN};
pub use time::fixed_now;
pub use user_repo::InMemoryUsers;
pub use util::{DummyClock, DummySlug};
