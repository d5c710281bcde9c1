use crate::model::Product;

/// Products available right after startup.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("prod1", "Soap", "a bar of soap"),
        Product::new("prod2", "Water", "a bottle of water"),
    ]
}
