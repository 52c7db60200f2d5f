// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand, UpdateArticleCommand,
    },
    dto::ArticleDto,
    queries::articles::GetArticleQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    /// Staged import consumed by this article.
    #[serde(default)]
    pub import_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub article: ArticleDraft,
}

/// Only the fields present are changed.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub article: ArticleChanges,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

impl From<ArticleDto> for ArticleResponse {
    fn from(article: ArticleDto) -> Self {
        Self { article }
    }
}

#[utoipa::path(
    get,
    path = "/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article as seen by the caller.", body = ArticleResponse),
        (status = 401, description = "Invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article(viewer.user(), GetArticleQuery { slug })
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Invalid article contents or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Import belongs to another user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown import.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Body does not match the request schema.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Duplicate title or import already consumed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let ArticleDraft {
        title,
        description,
        body,
        tag_list,
        import_id,
    } = payload.article;

    let command = CreateArticleCommand {
        title,
        description,
        body,
        tag_list,
        import_id,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article.into())))
}

#[utoipa::path(
    put,
    path = "/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 400, description = "Invalid article contents or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Body does not match the request schema.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(slug): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let ArticleChanges {
        title,
        description,
        body,
        tag_list,
    } = payload.article;

    let command = UpdateArticleCommand {
        slug,
        title,
        description,
        body,
        tag_list,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

#[utoipa::path(
    delete,
    path = "/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 204, description = "Article deleted with its comments and favorites."),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article favorited by the caller.", body = ArticleResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Favorites"
)]
pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .favorite_article(&user, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

#[utoipa::path(
    delete,
    path = "/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Favorite removed; a no-op if absent.", body = ArticleResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Favorites"
)]
pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .unfavorite_article(&user, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(|article| Json(article.into()))
}
