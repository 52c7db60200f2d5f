use crate::domain::article::ArticleView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleAuthorDto {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: u64,
    pub author: ArticleAuthorDto,
}

impl From<ArticleView<'_>> for ArticleDto {
    fn from(view: ArticleView<'_>) -> Self {
        let article = view.article();
        let contents = article.contents();
        Self {
            slug: contents.slug().as_str().to_string(),
            title: contents.title().as_str().to_string(),
            description: contents.description().as_str().to_string(),
            body: contents.body().as_str().to_string(),
            tag_list: contents.tags().iter().map(ToString::to_string).collect(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
            favorited: view.favorited(),
            favorites_count: view.favorited_count() as u64,
            author: ArticleAuthorDto {
                id: article.author().into(),
                username: article.author_name().to_string(),
            },
        }
    }
}
