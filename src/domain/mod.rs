pub mod article;
pub mod errors;
pub mod import;
pub mod user;
