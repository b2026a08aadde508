pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod errors;
pub mod image;
pub mod slug;
pub mod specifications;
pub mod user;
