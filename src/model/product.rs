//! Products in the store's inventory.
//!
//! [`Product`] implements the [`StoreEntity`](record_store::StoreEntity) trait; see
//! `impl StoreEntity for Product` in [`product_actor`](crate::product_actor).
use super::validation::{self, Validate, ValidationError, Validator};
use record_store::stats::{average, round2, Accumulator, Extent, Tally};
use record_store::{flag_matches, text_matches, Bounds, Predicate, Query};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub description: Option<String>,
    pub created_at: String,
}

fn default_in_stock() -> bool {
    true
}

/// DTO for Product creation. `in_stock` defaults to `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for ProductCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.length("name", &self.name, 1, 100)
            .positive("price", self.price);
        if let Some(description) = &self.description {
            v.max_length("description", description, 500);
        }
        v.finish()
    }
}

/// DTO for Product updates. An explicit `null` description clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    #[serde(default, deserialize_with = "record_store::patch::nullable")]
    pub description: Option<Option<String>>,
}

impl Validate for ProductUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        if let Some(name) = &self.name {
            v.length("name", name, 1, 100);
        }
        if let Some(price) = self.price {
            v.positive("price", price);
        }
        if let Some(Some(description)) = &self.description {
            v.max_length("description", description, 500);
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub price: Bounds<f64>,
    pub in_stock: Option<bool>,
}

impl Predicate<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        text_matches(self.category.as_deref(), &product.category)
            && self.price.contains(product.price)
            && flag_matches(self.in_stock, product.in_stock)
    }
}

fn price_bounds(min: Option<f64>, max: Option<f64>) -> Result<Bounds<f64>, ValidationError> {
    let mut v = Validator::new();
    if let Some(min) = min {
        v.non_negative("min_price", min);
    }
    if let Some(max) = max {
        v.non_negative("max_price", max);
    }
    v.finish()?;
    Ok(Bounds::new(min, max))
}

/// Raw `GET /products` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ProductListParams {
    pub fn into_query(self) -> Result<Query<ProductFilter>, ValidationError> {
        let filter = ProductFilter {
            category: self.category,
            price: price_bounds(self.min_price, self.max_price)?,
            in_stock: self.in_stock,
        };
        Ok(Query::paged(filter, validation::page(self.skip, self.limit)?))
    }
}

/// Raw `GET /categories/{category}/products` query string.
///
/// Unlike the listing, `in_stock` is always applied and defaults to `true`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySearchParams {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Default for CategorySearchParams {
    fn default() -> Self {
        Self {
            min_price: None,
            max_price: None,
            in_stock: default_in_stock(),
            skip: None,
            limit: None,
        }
    }
}

impl CategorySearchParams {
    pub fn into_query(self, category: &str) -> Result<Query<ProductFilter>, ValidationError> {
        let filter = ProductFilter {
            category: Some(category.to_owned()),
            price: price_bounds(self.min_price, self.max_price)?,
            in_stock: Some(self.in_stock),
        };
        Ok(Query {
            filter,
            page: validation::optional_page(self.skip, self.limit)?,
        })
    }
}

/// Inventory summary. `min_price`/`max_price` are `null` for an empty store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStats {
    pub total_products: u64,
    pub in_stock: u64,
    pub out_of_stock: u64,
    pub total_value: f64,
    pub average_price: f64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub categories: Tally,
}

#[derive(Debug, Default)]
pub struct ProductSummary {
    total: u64,
    in_stock: u64,
    value: f64,
    prices: Extent,
    categories: Tally,
}

impl Accumulator<Product> for ProductSummary {
    type Output = ProductStats;

    fn observe(&mut self, product: &Product) {
        self.total += 1;
        if product.in_stock {
            self.in_stock += 1;
        }
        self.value += product.price;
        self.prices.observe(product.price);
        self.categories.record(&product.category);
    }

    fn finish(self) -> ProductStats {
        ProductStats {
            total_products: self.total,
            in_stock: self.in_stock,
            out_of_stock: self.total - self.in_stock,
            total_value: round2(self.value),
            average_price: average(self.value, self.total),
            min_price: self.prices.min(),
            max_price: self.prices.max(),
            categories: self.categories,
        }
    }
}
