use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleSummaryDto, CommentDto, ImageDto, links},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let slug = Slug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let view = self
            .read_repo
            .find_view_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let article_id = view.article.id;
        let comments = self.comment_repo.list_views_for_article(article_id).await?;
        let images = self.image_repo.list_for_article(article_id).await?;

        let storage = self.storage.as_ref();
        Ok(ArticleDetailDto {
            article: ArticleSummaryDto::from_view(view, storage),
            comments: comments
                .into_iter()
                .map(|comment| CommentDto::from_view(comment, storage))
                .collect(),
            images: images
                .into_iter()
                .map(|image| ImageDto::from_image(image, storage))
                .collect(),
            comment_url: links::article_comments_url(slug.as_str()),
            add_image_url: links::article_images_url(slug.as_str()),
        })
    }
}
