//! Listing support: search, equality filters, pagination and sort.
//!
//! A [`ListQuery`] renders to one filter document that is shared by the
//! `countDocuments` and `find` calls in [`find_page`], so the reported total
//! always describes the same set the page was cut from.

use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, Document, doc},
    options::FindOptions,
};
use serde::{Serialize, de::DeserializeOwned};
use strum::EnumString;

/// Sort order accepted from query strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    #[strum(serialize = "asc", serialize = "ascending", serialize = "1")]
    Ascending,
    #[strum(serialize = "desc", serialize = "descending", serialize = "-1")]
    Descending,
}

impl SortDirection {
    /// Lenient parse: anything unrecognised is ascending.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
    }

    fn as_bson(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// One-based page window. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// `Some` only when both values parse as positive integers.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Option<Self> {
        let page = page?.trim().parse::<u64>().ok().filter(|p| *p >= 1)?;
        let limit = limit?.trim().parse::<u64>().ok().filter(|l| *l >= 1)?;
        Some(Self { page, limit })
    }

    /// Capped at `i64::MAX`; the server takes a signed skip.
    pub fn skip(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Filter, window and order for one listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<PageRequest>,
    pub sort: Option<SortSpec>,
    filters: Document,
}

impl ListQuery {
    /// Build from raw query-string values. Blank search is dropped and an
    /// incomplete or invalid page window means "no pagination".
    pub fn parse(search: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            search,
            page: PageRequest::parse(page, limit),
            ..Self::default()
        }
    }

    /// Require `field == value`.
    pub fn filter_eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.filters.insert(field, value.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }

    /// Filter document: equality filters plus a literal, case-insensitive
    /// substring match of the search text on `search_field`.
    pub fn filter(&self, search_field: &str) -> Document {
        let mut filter = self.filters.clone();

        if let Some(ref search) = self.search {
            filter.insert(
                search_field,
                doc! { "$regex": regex::escape(search), "$options": "i" },
            );
        }

        filter
    }

    pub fn find_options(&self) -> FindOptions {
        let mut options = FindOptions::default();

        if let Some(page) = self.page {
            options.skip = Some(page.skip());
            options.limit = Some(page.limit.min(i64::MAX as u64) as i64);
        }

        if let Some(ref sort) = self.sort {
            options.sort = Some(doc! { sort.field.as_str(): sort.direction.as_bson() });
        }

        options
    }
}

/// One page of results plus the size of the whole matching set.
///
/// Without a page window every match is returned and the page reports
/// `page = 1`, `limit = total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, window: Option<PageRequest>) -> Self {
        let (page, limit) = match window {
            Some(w) => (w.page, w.limit),
            None => (1, total),
        };

        Self {
            items,
            total,
            page,
            limit,
        }
    }

    pub fn empty(window: Option<PageRequest>) -> Self {
        Self::new(Vec::new(), 0, window)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Count and fetch one page of `collection` for `query`.
///
/// No matches is an empty page with `total == 0`, not an error.
pub async fn find_page<T>(
    collection: &Collection<T>,
    query: &ListQuery,
    search_field: &str,
) -> Result<Page<T>, mongodb::error::Error>
where
    T: DeserializeOwned + Send + Sync,
{
    let filter = query.filter(search_field);

    let total = collection.count_documents(filter.clone()).await?;
    if total == 0 {
        return Ok(Page::empty(query.page));
    }

    let cursor = collection
        .find(filter)
        .with_options(query.find_options())
        .await?;
    let items: Vec<T> = cursor.try_collect().await?;

    Ok(Page::new(items, total, query.page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        let query = ListQuery::parse(None, None, None);
        assert!(query.filter("product_name").is_empty());

        let options = query.find_options();
        assert_eq!(options.skip, None);
        assert_eq!(options.limit, None);
        assert_eq!(options.sort, None);
    }

    #[test]
    fn test_blank_search_adds_no_clause() {
        let query = ListQuery::parse(Some("   "), None, None);
        assert_eq!(query.search, None);
        assert!(query.filter("category_name").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_literal() {
        let query = ListQuery::parse(Some("usb-c (2m)"), None, None);
        let filter = query.filter("product_name");

        assert_eq!(
            filter,
            doc! { "product_name": { "$regex": r"usb\-c \(2m\)", "$options": "i" } }
        );
    }

    #[test]
    fn test_page_window_requires_both_positive_values() {
        assert_eq!(
            PageRequest::parse(Some("3"), Some("20")),
            Some(PageRequest { page: 3, limit: 20 })
        );
        assert_eq!(PageRequest::parse(Some("2"), None), None);
        assert_eq!(PageRequest::parse(None, Some("10")), None);
        assert_eq!(PageRequest::parse(Some("0"), Some("10")), None);
        assert_eq!(PageRequest::parse(Some("1"), Some("0")), None);
        assert_eq!(PageRequest::parse(Some("one"), Some("10")), None);
        assert_eq!(PageRequest::parse(Some("-1"), Some("10")), None);
    }

    #[test]
    fn test_huge_page_skip_fits_signed_range() {
        let window = PageRequest::parse(Some(&u64::MAX.to_string()), Some("10")).unwrap();
        assert_eq!(window.skip(), i64::MAX as u64);

        let options = ListQuery::parse(None, Some("9223372036854775807"), Some("2")).find_options();
        assert_eq!(options.skip, Some(i64::MAX as u64));
    }

    #[test]
    fn test_find_options_skip_and_limit() {
        let options = ListQuery::parse(None, Some("3"), Some("25")).find_options();
        assert_eq!(options.skip, Some(50));
        assert_eq!(options.limit, Some(25));
    }

    #[test]
    fn test_filters_and_search_share_one_document() {
        let query = ListQuery::parse(Some("lamp"), Some("1"), Some("1"))
            .filter_eq("product_category_id", 7_i64);

        assert_eq!(
            query.filter("product_name"),
            doc! {
                "product_category_id": 7_i64,
                "product_name": { "$regex": "lamp", "$options": "i" },
            }
        );
    }

    #[test]
    fn test_sort_direction_parsing() {
        for raw in ["asc", "ASC", "ascending", "1"] {
            assert_eq!(raw.parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        }
        for raw in ["desc", "Desc", "descending", "-1"] {
            assert_eq!(raw.parse::<SortDirection>().unwrap(), SortDirection::Descending);
        }
        assert_eq!(SortDirection::parse_or_default(Some("sideways")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse_or_default(None), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_rendered_into_options() {
        let options = ListQuery::default()
            .sort_by("price", SortDirection::Descending)
            .find_options();
        assert_eq!(options.sort, Some(doc! { "price": -1 }));
    }

    #[test]
    fn test_page_defaults_without_window() {
        let page = Page::new(vec!["a", "b", "c"], 3, None);
        assert_eq!((page.page, page.limit), (1, 3));

        let page = Page::new(vec!["a"], 5, Some(PageRequest { page: 2, limit: 1 }));
        assert_eq!((page.page, page.limit, page.total), (2, 1, 5));
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 10, Some(PageRequest { page: 1, limit: 2 }));
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, 10);
    }
}
