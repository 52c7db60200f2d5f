// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_import;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_import::PostgresImportRepository;
pub use postgres_user::PostgresUserRepository;
