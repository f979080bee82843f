//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?status=` filter for cart listings.
///
/// Absent or blank means "every status".
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

impl StatusFilter {
    pub fn as_deref(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_status_means_no_filter() {
        let filter = StatusFilter {
            status: Some("  ".into()),
        };
        assert_eq!(filter.as_deref(), None);
        assert_eq!(StatusFilter::default().as_deref(), None);
        let filter = StatusFilter {
            status: Some("cart".into()),
        };
        assert_eq!(filter.as_deref(), Some("cart"));
    }
}
