use super::CategoryCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::{
        category::{CategoryName, NewCategory},
        slug::Slug,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let new_category = NewCategory {
            name: CategoryName::new(command.name)?,
            slug: command.slug.map(Slug::new).transpose()?,
        };
        let created = self
            .slug_service
            .assign_and_insert(new_category, |category| self.category_repo.insert(category))
            .await?;
        tracing::info!(slug = %created.slug, "category created");
        Ok(created.into())
    }
}
