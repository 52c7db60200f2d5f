// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::profiles::get_profile,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::favorite_article,
        crate::presentation::http::controllers::articles::unfavorite_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::add_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::profiles::ProfileResponse,
            crate::presentation::http::controllers::articles::ArticleDraft,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleChanges,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::comments::CommentDraft,
            crate::presentation::http::controllers::comments::AddCommentRequest,
            crate::presentation::http::controllers::comments::CommentResponse,
            crate::presentation::http::controllers::comments::CommentsResponse,
            crate::application::dto::ProfileDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleAuthorDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Profiles", description = "Public user profiles"),
        (name = "Articles", description = "Article authoring and retrieval"),
        (name = "Favorites", description = "Per-user article favorites"),
        (name = "Comments", description = "Article comments"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Folio API",
        description = "Articles, favorites, comments and profiles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
        if servers.is_empty() {
            servers.push(Server::new("/"));
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/profiles/{username}",
            "/articles",
            "/articles/{slug}",
            "/articles/{slug}/favorite",
            "/articles/{slug}/comments",
            "/articles/{slug}/comments/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
