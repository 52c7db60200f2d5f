use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, Tag,
};
use std::collections::BTreeSet;

/// Editable content of an article, embedded in the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContents {
    title: ArticleTitle,
    slug: ArticleSlug,
    description: ArticleDescription,
    body: ArticleBody,
    tags: BTreeSet<Tag>,
}

impl ArticleContents {
    pub fn new(
        title: ArticleTitle,
        slug: ArticleSlug,
        description: ArticleDescription,
        body: ArticleBody,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            title,
            slug,
            description,
            body,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn slug(&self) -> &ArticleSlug {
        &self.slug
    }

    pub fn description(&self) -> &ArticleDescription {
        &self.description
    }

    pub fn body(&self) -> &ArticleBody {
        &self.body
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Applies only the fields present in `patch`; absent fields keep their value.
    pub fn apply(&mut self, patch: ArticleContentsPatch) {
        let ArticleContentsPatch {
            title,
            slug,
            description,
            body,
            tags,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleContentsPatch {
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl ArticleContentsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.body.is_none()
            && self.tags.is_none()
    }
}
