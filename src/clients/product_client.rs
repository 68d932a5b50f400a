//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `StoreClient<Product>` and exposes domain-specific methods.
use crate::model::{
    CategorySearchParams, Product, ProductCreate, ProductId, ProductListParams, ProductUpdate,
    Validate,
};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        params.validate()?;
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        update.validate()?;
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        params: ProductListParams,
    ) -> Result<Vec<Product>, ProductError> {
        let query = params.into_query()?;
        self.list(query).await
    }

    /// Products in `category` (case-insensitive). Only in-stock items unless asked otherwise.
    #[instrument(skip(self))]
    pub async fn search_by_category(
        &self,
        category: &str,
        params: CategorySearchParams,
    ) -> Result<Vec<Product>, ProductError> {
        let query = params.into_query(category)?;
        self.list(query).await
    }
}
