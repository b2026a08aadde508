use crate::application::ports::util::{DigitSource, SlugGenerator};
use rand::Rng;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[derive(Default, Clone)]
pub struct RandomDigitSource;

impl DigitSource for RandomDigitSource {
    fn next_digit(&self) -> u8 {
        rand::thread_rng().gen_range(0..10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_and_case() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello, Wor"), "hello-wor");
        assert_eq!(slugger.slugify("  --Rust 2024-- "), "rust-2024");
        assert_eq!(slugger.slugify("!!!"), "");
    }

    #[test]
    fn digits_stay_in_range() {
        let digits = RandomDigitSource;
        assert!((0..100).all(|_| digits.next_digit() < 10));
    }
}
