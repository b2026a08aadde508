// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Source of the random decimal digits used for image seeds and collision
/// suffixes. Values above 9 are reduced modulo 10 by the caller.
pub trait DigitSource: Send + Sync {
    fn next_digit(&self) -> u8;
}
