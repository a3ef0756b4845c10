use serde::Serialize;

use super::media::MediaSummary;

/// Pagination state reported by the upstream for a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u32,
    pub current_page: u32,
    pub last_page: u32,
    pub has_next_page: bool,
    pub per_page: u32,
}

impl PageInfo {
    /// `current_page <= last_page` and `has_next_page` agrees with the page numbers
    pub fn is_consistent(&self) -> bool {
        self.current_page <= self.last_page
            && self.has_next_page == (self.current_page < self.last_page)
    }
}

/// One page of listing results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPage {
    pub items: Vec<MediaSummary>,
    pub page_info: PageInfo,
}

impl MediaPage {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_consistency() {
        let info = PageInfo {
            total: 50,
            current_page: 1,
            last_page: 10,
            has_next_page: true,
            per_page: 5,
        };
        assert!(info.is_consistent());

        let last = PageInfo {
            current_page: 10,
            has_next_page: false,
            ..info
        };
        assert!(last.is_consistent());

        let lying = PageInfo {
            current_page: 10,
            has_next_page: true,
            ..info
        };
        assert!(!lying.is_consistent());
    }
}
