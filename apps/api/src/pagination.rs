use serde::Serialize;

pub const DEFAULT_PER_PAGE: i64 = 9;

/// Pagination envelope returned by list endpoints.
/// `from`/`to` are offset bounds into the full ordered result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub total: i64,
    pub per_page: i64,
    pub last_page: i64,
    pub current_page: i64,
    pub from: i64,
    pub to: i64,
    pub data: Vec<T>,
}

/// Pages below 1 are treated as page 1.
pub fn clamp_page(page: i64) -> i64 {
    page.max(1)
}

pub fn offset_for(page: i64, per_page: i64) -> i64 {
    (clamp_page(page) - 1) * per_page
}

impl<T> Page<T> {
    pub fn new(total: i64, per_page: i64, page: i64, data: Vec<T>) -> Self {
        let current_page = clamp_page(page);
        let from = (current_page - 1) * per_page;
        let to = from + data.len() as i64;
        Page {
            total,
            per_page,
            last_page: (total + per_page - 1) / per_page,
            current_page,
            from,
            to,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_set() {
        let page: Page<i64> = Page::new(0, 9, 1, vec![]);
        assert_eq!(page.total, 0);
        assert_eq!(page.last_page, 0);
        assert_eq!(page.from, 0);
        assert_eq!(page.to, 0);
    }

    #[test]
    fn test_partial_last_page() {
        let page = Page::new(10, 9, 2, vec![10]);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.from, 9);
        assert_eq!(page.to, 10);
    }

    #[test]
    fn test_exact_multiple_of_per_page() {
        let page = Page::new(18, 9, 1, vec![0; 9]);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.to, 9);
    }

    #[test]
    fn test_page_below_one_is_clamped() {
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(-3), 1);
        assert_eq!(offset_for(0, 9), 0);
        let page = Page::new(5, 9, 0, vec![0; 5]);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.from, 0);
    }

    #[test]
    fn test_offset_math() {
        assert_eq!(offset_for(1, 9), 0);
        assert_eq!(offset_for(3, 9), 18);
    }
}
