use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::CategoryRepository,
};

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Categories are managed by administrators only, listing included.
    pub async fn list_categories(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        ensure_capability(actor, "categories", "manage")?;
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
