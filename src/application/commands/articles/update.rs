use super::{ArticleCommandService, create::parse_tags};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        Article, ArticleBody, ArticleContentsPatch, ArticleDescription, ArticleTitle,
    },
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            slug,
            title,
            description,
            body,
            tag_list,
        } = command;
        let mut article = self.load_by_slug(slug).await?;

        let mut patch = ArticleContentsPatch::new();
        if let Some(title) = title.map(ArticleTitle::new).transpose()? {
            patch = self.retitle(&article, title, patch).await?;
        }
        if let Some(description) = description {
            patch = patch.with_description(ArticleDescription::new(description));
        }
        if let Some(body) = body.map(ArticleBody::new).transpose()? {
            patch = patch.with_body(body);
        }
        if let Some(tags) = tag_list.map(parse_tags).transpose()? {
            patch = patch.with_tags(tags);
        }

        let changed = !patch.is_empty();
        article.update_contents(actor.id, patch)?;
        if !changed {
            return Ok(article.view_for(Some(actor.id)).into());
        }

        article.touch(self.clock.now());
        let saved = self.write_repo.save(article).await?;
        tracing::info!(article.slug = %saved.contents().slug(), user.id = %actor.id, "article updated");
        Ok(saved.view_for(Some(actor.id)).into())
    }

    // A new title gets a fresh unique slug; an unchanged title keeps the old one.
    async fn retitle(
        &self,
        article: &Article,
        title: ArticleTitle,
        patch: ArticleContentsPatch,
    ) -> ApplicationResult<ArticleContentsPatch> {
        if &title == article.contents().title() {
            return Ok(patch.with_title(title));
        }
        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(article.id()))
            .await?;
        Ok(patch.with_title(title).with_slug(slug))
    }
}
