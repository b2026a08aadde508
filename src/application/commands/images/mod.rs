mod delete;
mod service;
mod update;
mod upload;

pub use delete::DeleteImageCommand;
pub use service::ImageCommandService;
pub use update::UpdateImageCommand;
pub use upload::UploadImagesCommand;
