// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, authors::AuthorCommandService,
            categories::CategoryCommandService, comments::CommentCommandService,
            images::ImageCommandService, users::UserCommandService,
        },
        lifecycle::EntityLifecycle,
        ports::{ClockPort, DigitSourcePort, FileStoragePort, PasswordHasherPort, SlugGeneratorPort},
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            comments::CommentQueryService, images::ImageQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
        category::CategoryRepository,
        comment::{CommentRepository, NestedCommentRepository},
        image::ImageRepository,
        slug::{SlugAssignmentService, SlugRegistry},
        user::UserRepository,
    },
};

/// Repository implementations the services are wired against.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn NestedCommentRepository>,
    pub images: Arc<dyn ImageRepository>,
    pub slugs: Arc<dyn SlugRegistry>,
}

#[derive(Clone)]
pub struct Ports {
    pub password_hasher: Arc<PasswordHasherPort>,
    pub clock: Arc<ClockPort>,
    pub slugger: Arc<SlugGeneratorPort>,
    pub digits: Arc<DigitSourcePort>,
    pub storage: Arc<FileStoragePort>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub image_commands: Arc<ImageCommandService>,
    pub image_queries: Arc<ImageQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    slug_service: Arc<SlugAssignmentService>,
    storage: Arc<FileStoragePort>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports) -> Self {
        let slug_service = Arc::new(SlugAssignmentService::new(
            Arc::clone(&repos.slugs),
            Arc::clone(&ports.slugger),
            Arc::clone(&ports.digits),
        ));

        let lifecycle = Arc::new(EntityLifecycle::new(
            Arc::clone(&repos.authors),
            Arc::clone(&repos.images),
            Arc::clone(&ports.storage),
            Arc::clone(&ports.clock),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&lifecycle),
            Arc::clone(&ports.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.authors),
            Arc::clone(&ports.storage),
        ));
        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.authors),
            Arc::clone(&ports.storage),
            Arc::clone(&lifecycle),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&slug_service),
            Arc::clone(&lifecycle),
            Arc::clone(&ports.clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.images),
            Arc::clone(&ports.storage),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.replies),
            Arc::clone(&repos.article_read),
            Arc::clone(&slug_service),
            Arc::clone(&ports.storage),
            Arc::clone(&ports.clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.replies),
            Arc::clone(&ports.storage),
        ));

        let image_commands = Arc::new(ImageCommandService::new(
            Arc::clone(&repos.images),
            Arc::clone(&repos.article_read),
            Arc::clone(&slug_service),
            Arc::clone(&ports.storage),
            Arc::clone(&lifecycle),
            Arc::clone(&ports.clock),
        ));
        let image_queries = Arc::new(ImageQueryService::new(
            Arc::clone(&repos.images),
            Arc::clone(&ports.storage),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&slug_service),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));

        Self {
            user_commands,
            user_queries,
            author_commands,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            image_commands,
            image_queries,
            category_commands,
            category_queries,
            slug_service,
            storage: ports.storage,
        }
    }

    pub fn slug_service(&self) -> Arc<SlugAssignmentService> {
        Arc::clone(&self.slug_service)
    }

    pub fn storage(&self) -> Arc<FileStoragePort> {
        Arc::clone(&self.storage)
    }
}
