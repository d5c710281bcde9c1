use serde::{Deserialize, Serialize};

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// It is keyed by `code`, which never changes once the product is stored.
///
/// The same shape is used as the create and update payload; on the wire it is the
/// `<product>` XML element. Missing child elements deserialize as empty strings so
/// that they are reported by validation rather than by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename = "product")]
pub struct Product {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The `<productList size="N">` envelope returned when listing products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "productList")]
pub struct ProductList {
    // Attributes have to precede child elements for the XML serializer.
    #[serde(rename = "@size")]
    pub size: usize,
    #[serde(rename = "product", default)]
    pub products: Vec<Product>,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            size: products.len(),
            products,
        }
    }
}
