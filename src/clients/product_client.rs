//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes registry-specific methods.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::Product;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(code) => ProductError::NotFound(code),
            FrameworkError::AlreadyExists(code) => ProductError::AlreadyExists(code),
            other => other
                .into_entity_error::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ProductClient {
    /// Every stored product, in no particular order.
    pub async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Product>, ProductError> {
        self.get(code.to_string()).await
    }

    #[instrument(skip(self, product), fields(code = %product.code))]
    pub async fn create_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "create_product called");
        self.inner.create(product).await.map_err(Self::map_error)
    }

    /// Replaces name and description of the product stored under `code`.
    ///
    /// `product.code` must equal `code`.
    #[instrument(skip(self, product))]
    pub async fn update_product(
        &self,
        code: &str,
        product: Product,
    ) -> Result<Product, ProductError> {
        debug!(?product, "update_product called");
        self.inner
            .update(code.to_string(), product)
            .await
            .map_err(Self::map_error)
    }

    /// Removes the product and returns what was stored.
    pub async fn delete_product(&self, code: &str) -> Result<Product, ProductError> {
        self.delete(code.to_string()).await
    }
}
