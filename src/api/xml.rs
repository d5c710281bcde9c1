//! XML extractor and response type, the `application/xml` counterpart of `axum::Json`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

pub const APPLICATION_XML: &str = "application/xml";

/// Parses the request body as XML, or renders `T` as an XML response.
///
/// Unparseable bodies are rejected with `400 Bad Request` and the parser message.
///
/// # Example
/// ```ignore
/// async fn create(Xml(product): Xml<Product>) -> Xml<Product> {
///     Xml(product)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Xml<T>(pub T);

fn reject(details: impl std::fmt::Display) -> Response {
    (
        StatusCode::BAD_REQUEST,
        format!("Malformed XML body: {details}"),
    )
        .into_response()
}

impl<T, S> FromRequest<S> for Xml<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let text = std::str::from_utf8(&body).map_err(reject)?;
        quick_xml::de::from_str(text).map(Xml).map_err(reject)
    }
}

impl<T: Serialize> IntoResponse for Xml<T> {
    fn into_response(self) -> Response {
        match quick_xml::se::to_string(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, APPLICATION_XML)], body).into_response(),
            Err(e) => {
                tracing::error!("XML serialization failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
            }
        }
    }
}
