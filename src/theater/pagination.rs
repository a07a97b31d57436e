use serde::Deserialize;

use super::error::ApiError;

pub const MOVIES_BASE_PATH: &str = "/theater/movies/";

pub const MAX_PER_PAGE: i64 = 20;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MovieListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    10
}

impl MovieListQuery {
    /// Range-check the query parameters before anything touches the store.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.page < 1 {
            return Err(ApiError::Validation(format!(
                "page must be greater than or equal to 1, got {}",
                self.page
            )));
        }
        if self.per_page < 1 || self.per_page > MAX_PER_PAGE {
            return Err(ApiError::Validation(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn total_pages(&self, total_items: i64) -> i64 {
        (total_items + self.per_page - 1) / self.per_page
    }

    pub fn prev_link(&self) -> Option<String> {
        (self.page > 1).then(|| page_link(self.page - 1, self.per_page))
    }

    pub fn next_link(&self, total_pages: i64) -> Option<String> {
        (self.page < total_pages).then(|| page_link(self.page + 1, self.per_page))
    }
}

fn page_link(page: i64, per_page: i64) -> String {
    format!("{}?page={}&per_page={}", MOVIES_BASE_PATH, page, per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: i64, per_page: i64) -> MovieListQuery {
        MovieListQuery { page, per_page }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(query(1, 10).total_pages(25), 3);
        assert_eq!(query(1, 10).total_pages(30), 3);
        assert_eq!(query(1, 10).total_pages(31), 4);
        assert_eq!(query(1, 20).total_pages(1), 1);
        assert_eq!(query(1, 1).total_pages(5), 5);
    }

    #[test]
    fn test_offset() {
        assert_eq!(query(1, 10).offset(), 0);
        assert_eq!(query(3, 10).offset(), 20);
        assert_eq!(query(2, 7).offset(), 7);
    }

    #[test]
    fn test_links() {
        let q = query(2, 10);
        assert_eq!(
            q.prev_link().as_deref(),
            Some("/theater/movies/?page=1&per_page=10")
        );
        assert_eq!(
            q.next_link(3).as_deref(),
            Some("/theater/movies/?page=3&per_page=10")
        );

        assert_eq!(query(1, 10).prev_link(), None);
        assert_eq!(query(3, 10).next_link(3), None);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(query(1, 1).validate().is_ok());
        assert!(query(1, 20).validate().is_ok());
        assert!(query(1000, 10).validate().is_ok());

        assert!(query(0, 10).validate().is_err());
        assert!(query(-1, 10).validate().is_err());
        assert!(query(1, 0).validate().is_err());
        assert!(query(1, 21).validate().is_err());
    }
}
