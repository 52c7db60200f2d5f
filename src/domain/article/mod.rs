pub mod comment;
pub mod contents;
pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use comment::Comment;
pub use contents::{ArticleContents, ArticleContentsPatch};
pub use entity::{Article, ArticleKey, ArticleState, ArticleView, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use specifications::CommentDeletionPolicy;
pub use value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, CommentBody, CommentId,
    Tag,
};
