use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total: u64) -> Self {
        let seen = u64::from(page) * u64::from(page_size);
        Self {
            items,
            page,
            page_size,
            total,
            has_next: seen < total,
        }
    }
}

/// Clamp client supplied paging parameters: pages start at 1, a zero size
/// means the default.
pub fn normalize(page: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let page_size = match page_size.unwrap_or(0) {
        0 => DEFAULT_PAGE_SIZE,
        size => size.min(MAX_PAGE_SIZE),
    };
    (page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_applies_defaults_and_caps() {
        assert_eq!(normalize(None, None), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(normalize(Some(0), Some(0)), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(normalize(Some(3), Some(500)), (3, MAX_PAGE_SIZE));
    }

    #[test]
    fn has_next_reflects_remaining_items() {
        assert!(Page::new(vec![1, 2], 1, 2, 3).has_next);
        assert!(!Page::new(vec![3], 2, 2, 3).has_next);
        assert!(!Page::<u8>::new(vec![], 1, 20, 0).has_next);
    }
}
