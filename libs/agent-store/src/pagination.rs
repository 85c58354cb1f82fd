// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Position within a paginated list. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    /// Records matching the current filters across all pages
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    /// Number of the last page; an empty result still has page 1.
    pub fn last_page(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// 1-based index range of the records shown on the current page, or
    /// `None` when the page is empty.
    pub fn item_range(&self, shown: usize) -> Option<(u64, u64)> {
        if shown == 0 {
            return None;
        }
        let first = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit) + 1;
        Some((first, first + shown as u64 - 1))
    }
}
