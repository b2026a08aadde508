mod delete;
mod picture;
mod service;
mod update;

pub use delete::DeleteAuthorCommand;
pub use picture::ReplacePictureCommand;
pub use service::AuthorCommandService;
pub use update::UpdateAuthorCommand;
