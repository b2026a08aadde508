pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod images;
pub mod links;
pub mod pagination;
pub mod users;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleSummaryDto, LikeOutcome};
pub use auth::AuthenticatedUser;
pub use categories::CategoryDto;
pub use comments::{CommentDto, NestedCommentDto};
pub use images::ImageDto;
pub use pagination::Page;
pub use users::{AuthorProfileDto, CapabilityView, UserDto, WhoAmIDto};
