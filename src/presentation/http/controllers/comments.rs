// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::articles::{AddCommentCommand, DeleteCommentCommand},
    dto::CommentDto,
    queries::articles::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentDraft {
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub comment: CommentDraft,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

#[utoipa::path(
    get,
    path = "/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Comments in creation order.", body = CommentsResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<CommentsResponse>> {
    let comments = state
        .services
        .article_queries
        .list_comments(ListCommentsQuery { slug })
        .await
        .into_http()?;

    Ok(Json(CommentsResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentResponse),
        (status = 400, description = "Malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Body does not match the request schema.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(slug): ApiPath<String>,
    ApiJson(payload): ApiJson<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = AddCommentCommand {
        slug,
        body: payload.comment.body,
    };

    let comment = state
        .services
        .article_commands
        .add_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

#[utoipa::path(
    delete,
    path = "/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 400, description = "Malformed comment id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller may not delete this comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug or comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath((slug, comment_id)): ApiPath<(String, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_comment(&user, DeleteCommentCommand { slug, comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
