//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! Products are keyed by `code`. The same `Product` shape is used for create and update
//! payloads; validation happens in [`ActorEntity::from_create_params`] and
//! [`ActorEntity::validate_update`], both of which run before the actor touches its map.

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{has_text, Product};
use async_trait::async_trait;

/// Checks name and description, in that order.
fn validate_details(product: &Product) -> Result<(), ProductError> {
    if !has_text(&product.name) {
        return Err(ProductError::invalid("Missing name."));
    }
    if !has_text(&product.description) {
        return Err(ProductError::invalid("Missing description."));
    }
    Ok(())
}

fn validate_code(product: &Product) -> Result<(), ProductError> {
    if !has_text(&product.code) {
        return Err(ProductError::invalid("Missing product code."));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type Create = Product;
    type Update = Product;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> String {
        self.code.clone()
    }

    /// Accepts the submitted product as-is once code, name and description are present.
    fn from_create_params(params: Product) -> Result<Self, ProductError> {
        validate_code(&params)?;
        validate_details(&params)?;
        Ok(params)
    }

    /// The body must name the same product as the path.
    fn validate_update(code: &String, update: &Product) -> Result<(), ProductError> {
        validate_code(update)?;
        if &update.code != code {
            return Err(ProductError::ValidationError(
                "Product code mismatch.".to_string(),
            ));
        }
        validate_details(update)
    }

    /// Overwrites name and description. The code never changes.
    async fn on_update(&mut self, update: Product, _ctx: &()) -> Result<(), ProductError> {
        self.name = update.name;
        self.description = update.description;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ProductError> {
        Ok(())
    }
}
