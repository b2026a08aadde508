use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page, pagination},
        error::ApplicationResult,
    },
    domain::article::{ArticleListQuery, ArticleOrdering},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    /// `created_at`, `updated_at` or `title`, optionally prefixed with `-`.
    pub ordering: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let (page, page_size) = pagination::normalize(query.page, query.page_size);
        let ordering = match query.ordering.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.parse::<ArticleOrdering>()?,
            _ => ArticleOrdering::default(),
        };
        let search = query
            .search
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());

        let listing = ArticleListQuery {
            search,
            ordering,
            page,
            page_size,
        };
        let (views, total) = self.read_repo.list_page(&listing).await?;

        let items = views
            .into_iter()
            .map(|view| ArticleSummaryDto::from_view(view, self.storage.as_ref()))
            .collect();
        Ok(Page::new(items, page, page_size, total))
    }
}
