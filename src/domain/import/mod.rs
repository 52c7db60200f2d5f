pub mod entity;
pub mod repository;

pub use entity::{Import, ImportId};
pub use repository::ImportRepository;
