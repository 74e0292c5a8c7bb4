use super::model::Product;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// A normalized `(page, limit)` request. Both values are always `>= 1`
/// and `limit` never exceeds [`MAX_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Builds a window from raw query-string values.
    ///
    /// Missing or non-numeric values fall back to the defaults; numeric
    /// values below 1 are raised to 1.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_integer(page).unwrap_or(DEFAULT_PAGE as i64);
        let limit = parse_integer(limit).unwrap_or(DEFAULT_LIMIT as i64);
        Self::new(page.max(1) as u64, limit.max(1) as u64)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// Leading-integer parse: `"12"`, `" 3 "`, `"4.7"` and `"5abc"` are accepted,
/// `"abc"` and `""` are not.
fn parse_integer(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    let digits_end = raw
        .char_indices()
        .find(|&(index, c)| !(c.is_ascii_digit() || (index == 0 && (c == '-' || c == '+'))))
        .map_or(raw.len(), |(index, _)| index);

    raw.get(..digits_end)?.parse::<i64>().ok()
}

/// One window of the product listing, plus the totals needed to page through it.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: u64,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, pagination: Pagination, total_products: u64) -> Self {
        Self {
            products,
            current_page: pagination.page(),
            total_pages: pagination.total_pages(total_products),
            total_products,
        }
    }
}
