// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleBody, ArticleContents, ArticleDescription, ArticleTitle, NewArticle, Tag,
        },
        errors::DomainResult,
        import::{Import, ImportId},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub import_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: String,
    body: Option<String>,
    tag_list: Vec<String>,
    import_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_list.push(tag.into());
        self
    }

    pub fn import_id(mut self, import_id: i64) -> Self {
        self.import_id = Some(import_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description,
            body: self.body.ok_or("body is required")?,
            tag_list: self.tag_list,
            import_id: self.import_id,
        })
    }
}

pub(super) fn parse_tags(raw: Vec<String>) -> DomainResult<Vec<Tag>> {
    raw.into_iter().map(Tag::new).collect()
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let description = ArticleDescription::new(command.description);
        let tags = parse_tags(command.tag_list)?;

        let import = match command.import_id {
            Some(raw) => Some(self.claimable_import(actor, ImportId::new(raw)?).await?),
            None => None,
        };

        let slug = self.slug_service.generate_unique_slug(&title, None).await?;
        let now = self.clock.now();

        let contents = ArticleContents::new(title, slug, description, body, tags);
        let mut new_article = NewArticle::new(&author, contents, now);
        if let Some(import) = &import {
            new_article = new_article.with_import(import.id);
        }

        // Claims the import too; a concurrent claim loses with Conflict and
        // nothing is stored.
        let created = self.write_repo.insert(new_article).await?;

        tracing::info!(
            article.slug = %created.contents().slug(),
            user.id = %actor.id,
            "article created"
        );
        Ok(created.view_for(Some(actor.id)).into())
    }

    async fn claimable_import(
        &self,
        actor: &AuthenticatedUser,
        id: ImportId,
    ) -> ApplicationResult<Import> {
        let mut import = self
            .import_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("import not found"))?;

        if !import.is_owned_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "import belongs to another user",
            ));
        }
        import.mark_imported()?;
        Ok(import)
    }
}
