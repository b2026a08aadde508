pub mod articles;
pub mod authors;
pub(crate) mod capability;
pub mod categories;
pub mod comments;
pub mod images;
pub mod users;
