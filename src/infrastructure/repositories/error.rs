use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR_TITLE: &str = "articles_author_title_key";
const CNT_ARTICLE_IMPORT: &str = "articles_import_id_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_FAVORITE_USER: &str = "article_favorites_user_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_ARTICLE_AUTHOR_TITLE => DomainError::Conflict(
                        "author already has an article with this title".into(),
                    ),
                    CNT_ARTICLE_IMPORT => {
                        DomainError::Conflict("import was already consumed".into())
                    }
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_COMMENT_AUTHOR => DomainError::NotFound("comment author not found".into()),
                    CNT_FAVORITE_USER => DomainError::NotFound("user not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "40001" => {
                        return DomainError::Conflict("serialization failure, please retry".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
