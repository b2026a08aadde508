// src/domain/slug/mod.rs
pub mod registry;
pub mod service;
pub mod value_objects;

pub use registry::SlugRegistry;
pub use service::{MAX_PERSIST_ATTEMPTS, MAX_SUFFIX_DIGITS, SEED_CHARS, SlugAssignmentService};
pub use value_objects::{MAX_SLUG_LEN, Slug, SlugKind, SlugSeed, Sluggable};
