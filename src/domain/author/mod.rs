pub mod entity;
pub mod repository;

pub use entity::{AuthorBio, AuthorId, AuthorProfile, AuthorProfileUpdate, DEFAULT_PICTURE, NewAuthorProfile};
pub use repository::AuthorRepository;
