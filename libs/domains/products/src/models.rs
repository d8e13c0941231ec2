use database::mongodb::{ListQuery, Page, SortDirection};
use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Sequential product identifier
    #[schema(example = 1)]
    pub id_product: u32,
    #[schema(example = "Mechanical keyboard")]
    pub product_name: String,
    #[schema(example = "Tenkeyless, brown switches")]
    pub description: String,
    #[schema(example = 79.9)]
    pub price: f64,
    /// Seller reference (not checked)
    #[schema(example = 12)]
    pub id_seller: u32,
    /// Category reference (not checked)
    #[schema(example = 3)]
    pub product_category_id: u32,
}

/// Stored shape of a product in the `product` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub id_product: u32,
    pub product_name: String,
    pub description: String,
    pub price: f64,
    pub id_seller: u32,
    pub product_category_id: u32,
}

impl ProductDocument {
    pub fn new(id_product: u32, input: CreateProduct) -> Self {
        Self {
            id: ObjectId::new(),
            id_product,
            product_name: input.product_name,
            description: input.description,
            price: input.price,
            id_seller: input.id_seller,
            product_category_id: input.product_category_id,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id_product: doc.id_product,
            product_name: doc.product_name,
            description: doc.description,
            price: doc.price,
            id_seller: doc.id_seller,
            product_category_id: doc.product_category_id,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub product_name: String,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub id_seller: u32,
    pub product_category_id: u32,
}

/// Single-field overwrite, e.g. `{"field": "price", "value": 12.5}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProductFieldUpdate {
    ProductName(String),
    Description(String),
    Price(f64),
    IdSeller(u32),
    ProductCategoryId(u32),
}

impl ProductFieldUpdate {
    /// Stored field name
    pub fn field(&self) -> &'static str {
        match self {
            ProductFieldUpdate::ProductName(_) => "product_name",
            ProductFieldUpdate::Description(_) => "description",
            ProductFieldUpdate::Price(_) => "price",
            ProductFieldUpdate::IdSeller(_) => "id_seller",
            ProductFieldUpdate::ProductCategoryId(_) => "product_category_id",
        }
    }

    pub fn value(&self) -> Bson {
        match self {
            ProductFieldUpdate::ProductName(v) | ProductFieldUpdate::Description(v) => {
                Bson::String(v.clone())
            }
            ProductFieldUpdate::Price(v) => Bson::Double(*v),
            ProductFieldUpdate::IdSeller(v) | ProductFieldUpdate::ProductCategoryId(v) => {
                Bson::Int64(i64::from(*v))
            }
        }
    }
}

impl Validate for ProductFieldUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self {
            ProductFieldUpdate::ProductName(name) if name.is_empty() || name.len() > 255 => {
                errors.add("value", ValidationError::new("length"));
            }
            ProductFieldUpdate::Price(price) if !price.is_finite() || *price < 0.0 => {
                errors.add("value", ValidationError::new("range"));
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Fields products can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProductSortField {
    IdProduct,
    ProductName,
    Price,
    IdSeller,
    ProductCategoryId,
}

/// Query string of `GET /product`.
///
/// Numbers are taken as strings: a malformed page window or category is
/// ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Case-insensitive substring of `product_name`
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Only products in this category
    pub category_id: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
}

impl ProductListParams {
    pub fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::parse(
            self.search.as_deref(),
            self.page.as_deref(),
            self.limit.as_deref(),
        );

        if let Some(category_id) = self
            .category_id
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
        {
            // Out-of-range ids stay in the filter and match nothing.
            query = query.filter_eq("product_category_id", category_id);
        }

        if let Some(field) = self
            .sort_by
            .as_deref()
            .and_then(|s| s.trim().parse::<ProductSortField>().ok())
        {
            query = query.sort_by(
                field.as_ref(),
                SortDirection::parse_or_default(self.sort_direction.as_deref()),
            );
        }

        query
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    pub id_product: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
    /// Matches before pagination
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<Product>> for ProductListResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            data: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SellerProductsResponse {
    pub data: Vec<Product>,
}
