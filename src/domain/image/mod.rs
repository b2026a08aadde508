pub mod entity;
pub mod repository;

pub use entity::{Image, ImageCaption, ImageId, NewImage};
pub use repository::ImageRepository;
