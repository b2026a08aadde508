use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        lifecycle::EntityLifecycle,
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryId, CategoryRepository},
        slug::{Slug, SlugAssignmentService},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugAssignmentService>,
    pub(super) lifecycle: Arc<EntityLifecycle>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugAssignmentService>,
        lifecycle: Arc<EntityLifecycle>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            lifecycle,
            clock,
        }
    }

    pub(super) async fn load_by_slug(&self, slug: &str) -> ApplicationResult<Article> {
        let slug = Slug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Resolve category slugs, rejecting any that do not exist.
    pub(super) async fn resolve_categories(
        &self,
        slugs: Vec<String>,
    ) -> ApplicationResult<Vec<CategoryId>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        let mut requested = slugs
            .into_iter()
            .map(Slug::new)
            .collect::<Result<Vec<_>, _>>()?;
        requested.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        requested.dedup();

        let found = self.category_repo.find_by_slugs(&requested).await?;
        if found.len() != requested.len() {
            let missing: Vec<_> = requested
                .iter()
                .filter(|slug| !found.iter().any(|category| &category.slug == *slug))
                .map(Slug::as_str)
                .collect();
            return Err(ApplicationError::validation(format!(
                "unknown categories: {}",
                missing.join(", ")
            )));
        }
        Ok(found.into_iter().map(|category| category.id).collect())
    }
}
