//! Entity trait implementation for the Product domain type.
//!
//! Enables [`Product`] to be managed by the generic [`record_store::StoreActor`].

use crate::model::{
    Product, ProductCreate, ProductFilter, ProductId, ProductStats, ProductSummary, ProductUpdate,
};
use record_store::patch::assign;
use record_store::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Stats = ProductStats;
    type Summary = ProductSummary;

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_create_params(id: ProductId, created_at: String, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            in_stock: params.in_stock,
            description: params.description,
            created_at,
        }
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`, `price`, `category`, `in_stock` when present
    /// - `description` when present, including an explicit `null`
    fn merge(&self, update: ProductUpdate) -> Self {
        let mut product = self.clone();
        assign(&mut product.name, update.name);
        assign(&mut product.price, update.price);
        assign(&mut product.category, update.category);
        assign(&mut product.in_stock, update.in_stock);
        assign(&mut product.description, update.description);
        product
    }
}
