use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

/// One-based page request. `skip` is derived, never supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct PageRequest {
    #[validate(range(min = 1))]
    pub page: u32,
    #[validate(range(min = 1))]
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Number of rows to skip, or `None` when `(page - 1) * limit` does not fit in an `i64`.
    pub fn skip(&self) -> Option<i64> {
        i64::from(self.page.checked_sub(1)?).checked_mul(i64::from(self.limit))
    }

    /// Whether another page likely follows a page of `returned` rows.
    ///
    /// A page that is exactly full reports `true` even when nothing remains.
    pub fn has_more(&self, returned: usize) -> bool {
        returned == self.limit as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
