use database::mongodb::{ListQuery, Page, SortDirection};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductCategory {
    /// Sequential category identifier
    #[schema(example = 1)]
    pub category_id: u32,
    #[schema(example = "Electronics")]
    pub category_name: String,
    /// Storage identifier as a 24-character hex string
    #[serde(rename = "OID")]
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub oid: String,
}

/// Stored shape of a category in the `product_category` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub category_id: u32,
    pub category_name: String,
}

impl From<CategoryDocument> for ProductCategory {
    fn from(doc: CategoryDocument) -> Self {
        Self {
            category_id: doc.category_id,
            category_name: doc.category_name,
            oid: doc.id.to_hex(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateProductCategory {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Electronics")]
    pub category_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateProductCategory {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Home Electronics")]
    pub category_name: String,
}

/// Fields categories can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CategorySortField {
    CategoryId,
    CategoryName,
}

/// Query string of `GET /product_category`.
///
/// Values stay strings so that malformed numbers are ignored instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductCategoryListParams {
    /// Case-insensitive substring of `category_name`
    pub search: Option<String>,
    /// One-based page number, used together with `limit`
    pub page: Option<String>,
    /// Page size, used together with `page`
    pub limit: Option<String>,
    /// `category_id` or `category_name`; anything else is ignored
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
}

impl ProductCategoryListParams {
    pub fn to_query(&self) -> ListQuery {
        let query = ListQuery::parse(
            self.search.as_deref(),
            self.page.as_deref(),
            self.limit.as_deref(),
        );

        match self
            .sort_by
            .as_deref()
            .and_then(|s| s.trim().parse::<CategorySortField>().ok())
        {
            Some(field) => query.sort_by(
                field.as_ref(),
                SortDirection::parse_or_default(self.sort_direction.as_deref()),
            ),
            None => query,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreated {
    pub category_id: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub data: ProductCategory,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub data: Vec<ProductCategory>,
    /// Matches before pagination
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<ProductCategory>> for CategoryListResponse {
    fn from(page: Page<ProductCategory>) -> Self {
        Self {
            data: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}
