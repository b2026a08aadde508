use std::sync::Arc;

use crate::domain::{category::CategoryRepository, slug::SlugAssignmentService};

pub struct CategoryCommandService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugAssignmentService>,
}

impl CategoryCommandService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugAssignmentService>,
    ) -> Self {
        Self {
            category_repo,
            slug_service,
        }
    }
}
