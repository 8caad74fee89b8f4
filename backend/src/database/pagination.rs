//! Derived page metadata for windowed list results.
//!
//! Computed fresh for every list request from the filtered total, never
//! persisted. Serializes with PascalCase member names because the value is
//! emitted verbatim in the `x-pagination` response header.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaginationMetadata {
    pub total_item_count: u64,
    pub total_page_count: u64,
    pub page_size: u32,
    pub current_page: u32,
}

impl PaginationMetadata {
    /// Derives the page count as `ceil(total / page_size)`.
    ///
    /// `page_size` must be at least 1; request handlers clamp it before any
    /// repository call, so a zero can only come from a programming error.
    pub fn new(total_item_count: u64, page_size: u32, current_page: u32) -> Self {
        debug_assert!(page_size > 0, "page_size must be clamped to >= 1 upstream");
        Self {
            total_item_count,
            total_page_count: total_item_count.div_ceil(u64::from(page_size)),
            page_size,
            current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let metadata = PaginationMetadata::new(25, 10, 1);
        assert_eq!(metadata.total_page_count, 3);
    }

    #[test]
    fn exact_multiple_does_not_round() {
        let metadata = PaginationMetadata::new(20, 10, 2);
        assert_eq!(metadata.total_page_count, 2);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let metadata = PaginationMetadata::new(0, 10, 1);
        assert_eq!(metadata.total_page_count, 0);
    }

    #[test]
    fn serializes_pascal_case_for_the_header() {
        let metadata = PaginationMetadata::new(3, 10, 1);
        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(
            json,
            r#"{"TotalItemCount":3,"TotalPageCount":1,"PageSize":10,"CurrentPage":1}"#
        );
    }
}
