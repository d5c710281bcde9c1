//! `/products` endpoints. Bodies are XML.

use super::xml::{Xml, APPLICATION_XML};
use super::AppState;
use crate::model::{Product, ProductList};
use crate::product_actor::ProductError;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .options(collection_options),
        )
        .route(
            "/products/{code}",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .options(item_options),
        )
}

const CREATE_LINK: &str = r#"<products>; rel="create"; type="application/xml""#;

fn links(code: &str) -> String {
    format!(
        r#"<products/{code}>; rel="update"; type="{APPLICATION_XML}", <products>; rel="listAll"; type="{APPLICATION_XML}""#
    )
}

/// Attaches the hypermedia `Link` header. A code that is not a valid header value
/// simply goes without links.
fn with_links(mut response: Response, code: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(&links(code)) {
        response.headers_mut().insert(header::LINK, value);
    }
    response
}

/// A missing product points the client at the collection it can create it in.
fn or_create_link(result: Result<Response, ProductError>) -> Response {
    match result {
        Err(e @ ProductError::NotFound(_)) => {
            let mut response = e.into_response();
            response
                .headers_mut()
                .insert(header::LINK, HeaderValue::from_static(CREATE_LINK));
            response
        }
        other => other.into_response(),
    }
}

/// GET /products
async fn list_products(State(state): State<AppState>) -> Result<Xml<ProductList>, ProductError> {
    let mut products = state.products.get_all().await?;
    products.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(Xml(ProductList::new(products)))
}

/// POST /products
async fn create_product(
    State(state): State<AppState>,
    Xml(product): Xml<Product>,
) -> Result<Response, ProductError> {
    let product = state.products.create_product(product).await?;
    let code = product.code.clone();
    let response = (
        StatusCode::CREATED,
        [(header::LOCATION, format!("products/{code}"))],
        Xml(product),
    )
        .into_response();
    Ok(with_links(response, &code))
}

/// OPTIONS /products
async fn collection_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET, POST, OPTIONS")])
}

/// GET /products/{code}
async fn get_product(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let result = match state.products.find_by_code(&code).await {
        Ok(Some(product)) => Ok(with_links(Xml(product).into_response(), &code)),
        Ok(None) => Err(ProductError::NotFound(code)),
        Err(e) => Err(e),
    };
    or_create_link(result)
}

/// PUT /products/{code}
async fn update_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Xml(product): Xml<Product>,
) -> Response {
    let result = state
        .products
        .update_product(&code, product)
        .await
        .map(|product| with_links(Xml(product).into_response(), &code));
    or_create_link(result)
}

/// DELETE /products/{code}
async fn delete_product(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let result = state
        .products
        .delete_product(&code)
        .await
        .map(|product| Xml(product).into_response());
    or_create_link(result)
}

/// OPTIONS /products/{code}
async fn item_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, "GET, PUT, DELETE, OPTIONS")])
}
