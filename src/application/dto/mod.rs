pub mod articles;
pub mod auth;
pub mod comments;
pub mod profiles;
pub mod serde_time;

pub use articles::{ArticleAuthorDto, ArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use profiles::ProfileDto;
