use std::{fmt, str::FromStr};

use crate::domain::article::comment::Comment;
use crate::domain::errors::DomainError;
use crate::domain::user::UserId;

/// Rule used to decide who may delete a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentDeletionPolicy {
    /// The acting user must be the article author and the comment author at once.
    #[default]
    Strict,
    /// Either the article author or the comment author may delete.
    AuthorOrOwner,
}

impl CommentDeletionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentDeletionPolicy::Strict => "strict",
            CommentDeletionPolicy::AuthorOrOwner => "author-or-owner",
        }
    }
}

impl fmt::Display for CommentDeletionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentDeletionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CommentDeletionPolicy::Strict),
            "author-or-owner" | "author_or_owner" => Ok(CommentDeletionPolicy::AuthorOrOwner),
            other => Err(DomainError::Validation(format!(
                "unknown comment deletion policy '{other}'"
            ))),
        }
    }
}

pub struct CanDeleteCommentSpec<'a> {
    policy: CommentDeletionPolicy,
    article_author: UserId,
    comment: &'a Comment,
    user_id: UserId,
}

impl<'a> CanDeleteCommentSpec<'a> {
    pub fn new(
        policy: CommentDeletionPolicy,
        article_author: UserId,
        comment: &'a Comment,
        user_id: UserId,
    ) -> Self {
        Self {
            policy,
            article_author,
            comment,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        let is_article_author = self.user_id == self.article_author;
        let is_comment_author = self.user_id == self.comment.author();
        match self.policy {
            CommentDeletionPolicy::Strict => is_article_author && is_comment_author,
            CommentDeletionPolicy::AuthorOrOwner => is_article_author || is_comment_author,
        }
    }
}

pub struct CanModifyArticleSpec {
    article_author: UserId,
    user_id: UserId,
}

impl CanModifyArticleSpec {
    pub fn new(article_author: UserId, user_id: UserId) -> Self {
        Self {
            article_author,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article_author == self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleId, CommentBody, CommentId};
    use chrono::Utc;

    fn uid(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    fn comment_by(author: i64) -> Comment {
        Comment::persisted(
            CommentId::new(1).unwrap(),
            ArticleId::new(1).unwrap(),
            uid(author),
            CommentBody::new("Nice!"),
            Utc::now(),
        )
    }

    #[test]
    fn strict_policy_requires_both_roles() {
        let foreign = comment_by(2);
        let own = comment_by(1);
        let strict = CommentDeletionPolicy::Strict;

        assert!(!CanDeleteCommentSpec::new(strict, uid(1), &foreign, uid(1)).is_satisfied());
        assert!(!CanDeleteCommentSpec::new(strict, uid(1), &foreign, uid(2)).is_satisfied());
        assert!(CanDeleteCommentSpec::new(strict, uid(1), &own, uid(1)).is_satisfied());
    }

    #[test]
    fn author_or_owner_policy_accepts_either_role() {
        let foreign = comment_by(2);
        let policy = CommentDeletionPolicy::AuthorOrOwner;

        assert!(CanDeleteCommentSpec::new(policy, uid(1), &foreign, uid(1)).is_satisfied());
        assert!(CanDeleteCommentSpec::new(policy, uid(1), &foreign, uid(2)).is_satisfied());
        assert!(!CanDeleteCommentSpec::new(policy, uid(1), &foreign, uid(3)).is_satisfied());
    }

    #[test]
    fn policy_parses_from_config_values() {
        assert_eq!(
            "strict".parse::<CommentDeletionPolicy>().unwrap(),
            CommentDeletionPolicy::Strict
        );
        assert_eq!(
            " Author-Or-Owner ".parse::<CommentDeletionPolicy>().unwrap(),
            CommentDeletionPolicy::AuthorOrOwner
        );
        assert!("anyone".parse::<CommentDeletionPolicy>().is_err());
    }

    #[test]
    fn only_author_can_modify_article() {
        assert!(CanModifyArticleSpec::new(uid(1), uid(1)).is_satisfied());
        assert!(!CanModifyArticleSpec::new(uid(1), uid(2)).is_satisfied());
    }
}
