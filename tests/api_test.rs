//! Handler tests for the HTTP surface.
//!
//! Each test builds the router over a freshly seeded registry and drives it with
//! `oneshot`, checking status codes, headers and bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use resource_registry::api::{self, AppState};
use resource_registry::config::RegistryConfig;
use resource_registry::lifecycle::RegistrySystem;
use resource_registry::model::{employee, Product, ProductList, User, UserList};
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let system = RegistrySystem::new(&RegistryConfig::default());
    api::router(AppState::new(
        system.product_client.clone(),
        system.user_client.clone(),
        employee::directory(),
    ))
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

async fn xml_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    quick_xml::de::from_str(&body_text(response).await).unwrap()
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn xml_request(method: &str, uri: &str, xml: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/xml")
        .body(Body::from(xml.to_string()))
        .unwrap()
}

fn json_request(method: &str, uri: &str, value: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(value.to_string()))
        .unwrap()
}

// --- Products ---

#[tokio::test]
async fn test_list_products_is_sorted_xml() {
    let response = app().oneshot(request("GET", "/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xml");

    let list: ProductList = xml_body(response).await;
    assert_eq!(list.size, 2);
    let codes: Vec<_> = list.products.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, ["prod1", "prod2"]);
}

#[tokio::test]
async fn test_create_product_returns_201_with_headers() {
    let response = app()
        .oneshot(xml_request(
            "POST",
            "/products",
            "<product><code>prod3</code><name>Towel</name><description>a soft towel</description></product>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "products/prod3");
    let link = response.headers()[header::LINK].to_str().unwrap().to_string();
    assert!(link.contains(r#"<products/prod3>; rel="update""#));
    assert!(link.contains(r#"<products>; rel="listAll""#));

    let product: Product = xml_body(response).await;
    assert_eq!(product, Product::new("prod3", "Towel", "a soft towel"));
}

#[tokio::test]
async fn test_create_product_errors() {
    let app = app();

    let response = app
        .clone()
        .oneshot(xml_request(
            "POST",
            "/products",
            "<product><code>prod1</code><name>Soap</name><description>again</description></product>",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(response).await, "Specified productCode is already taken.");

    let response = app
        .oneshot(xml_request(
            "POST",
            "/products",
            "<product><code>prod9</code><name>Nameless</name></product>",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(
        body_text(response).await,
        "Invalid product definition! Missing description."
    );
}

#[tokio::test]
async fn test_get_update_delete_product() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request("GET", "/products/prod2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::LINK));
    let water: Product = xml_body(response).await;
    assert_eq!(water.name, "Water");

    let response = app
        .clone()
        .oneshot(xml_request(
            "PUT",
            "/products/prod2",
            "<product><code>prod2</code><name>Water</name><description>a jug of water</description></product>",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let water: Product = xml_body(response).await;
    assert_eq!(water.description, "a jug of water");

    let response = app
        .clone()
        .oneshot(request("DELETE", "/products/prod2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request("GET", "/products/prod2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response).await,
        "Product with given code does not exists"
    );
}

#[tokio::test]
async fn test_update_product_mismatch_is_406() {
    let response = app()
        .oneshot(xml_request(
            "PUT",
            "/products/prod1",
            "<product><code>prod2</code><name>Soap</name><description>x</description></product>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(body_text(response).await, "Product code mismatch.");
}

#[tokio::test]
async fn test_missing_product_links_to_create() {
    let app = app();
    let create_link = r#"<products>; rel="create"; type="application/xml""#;

    for req in [
        request("GET", "/products/ghost"),
        request("DELETE", "/products/ghost"),
        xml_request(
            "PUT",
            "/products/ghost",
            "<product><code>ghost</code><name>Ghost</name><description>boo</description></product>",
        ),
    ] {
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::LINK], create_link);
    }

    // Validation failures are not "missing" and carry no link.
    let response = app
        .oneshot(xml_request(
            "PUT",
            "/products/ghost",
            "<product><code>ghost</code></product>",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    assert!(!response.headers().contains_key(header::LINK));
}

#[tokio::test]
async fn test_product_options() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request("OPTIONS", "/products"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()[header::ALLOW], "GET, POST, OPTIONS");

    let response = app
        .oneshot(request("OPTIONS", "/products/prod1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ALLOW], "GET, PUT, DELETE, OPTIONS");
}

// --- Users ---

#[tokio::test]
async fn test_list_users_hides_avatar() {
    let response = app().oneshot(request("GET", "/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let raw: serde_json::Value = json_body(response).await;
    assert_eq!(raw["count"], 2);
    assert_eq!(raw["users"][0]["userName"], "tyler");
    assert!(raw["users"][0].get("avatar").is_none());
    assert!(raw["users"][0].get("lastUpdated").is_some());

    let list: UserList = serde_json::from_value(raw).unwrap();
    assert_eq!(list.users[1].user_name, "user2");
}

#[tokio::test]
async fn test_create_user_returns_201() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({
                "userName": "marla",
                "firstName": "Marla",
                "surname": "Singer",
                "email": "marla@fc.com"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "users/marla");
    assert_eq!(
        response.headers()[header::LINK],
        r#"<users/marla>; rel="update"; type="application/xml", <users>; rel="listAll"; type="application/xml""#
    );
    let user: User = json_body(response).await;
    assert_eq!(user.surname, "Singer");
}

#[tokio::test]
async fn test_create_user_errors() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"userName": "tyler", "firstName": "T", "surname": "D", "email": "t@fc.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(response).await, "Specified username is already taken.");

    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"userName": "bob", "firstName": "Bob"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(
        body_text(response).await,
        "Invalid user definition! Missing surname."
    );
}

#[tokio::test]
async fn test_get_and_update_user() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/users/tyler",
            json!({"email": "tyler@paper.st"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request("GET", "/users/tyler"))
        .await
        .unwrap();
    let user: User = json_body(response).await;
    assert_eq!(user.email, "tyler@paper.st");
    assert_eq!(user.first_name, "Tyler");

    let response = app
        .oneshot(request("GET", "/users/ghost"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response).await,
        "User with specified username does not exist."
    );
}

const BOUNDARY: &str = "XYZ";

fn multipart_request(uri: &str, field: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"a.png\"\r\nContent-Type: image/png\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_avatar_endpoints() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request("GET", "/users/tyler/avatar"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert!(body_bytes(response).await.starts_with(b"\x89PNG"));

    let response = app
        .clone()
        .oneshot(multipart_request("/users/tyler/avatar", "avatar", &[1, 2, 3]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::LOCATION], "users/tyler/avatar");

    // Only the file content is stored, not the form envelope.
    let response = app
        .clone()
        .oneshot(request("GET", "/users/tyler/avatar"))
        .await
        .unwrap();
    assert_eq!(body_bytes(response).await, vec![1u8, 2, 3]);

    let response = app
        .oneshot(multipart_request("/users/ghost/avatar", "avatar", &[9]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_avatar_upload_without_avatar_field_is_500() {
    let app = app();

    let response = app
        .clone()
        .oneshot(multipart_request("/users/tyler/avatar", "picture", &[7, 7]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal server error.");

    // The seeded avatar is still in place.
    let response = app
        .oneshot(request("GET", "/users/tyler/avatar"))
        .await
        .unwrap();
    assert!(body_bytes(response).await.starts_with(b"\x89PNG"));
}

#[tokio::test]
async fn test_avatar_missing_vs_unknown_user() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"userName": "marla", "firstName": "Marla", "surname": "Singer", "email": "marla@fc.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(request("GET", "/users/marla/avatar"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .oneshot(request("GET", "/users/ghost/avatar"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response).await,
        "User with specified username does not exist."
    );
}

#[tokio::test]
async fn test_user_options() {
    let app = app();

    for (uri, allow) in [
        ("/users", "GET, POST, OPTIONS"),
        ("/users/tyler", "GET, PUT, OPTIONS"),
        ("/users/tyler/avatar", "GET, PUT, OPTIONS"),
        ("/employees", "GET, OPTIONS"),
    ] {
        let response = app.clone().oneshot(request("OPTIONS", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{uri}");
        assert_eq!(response.headers()[header::ALLOW], allow, "{uri}");
    }
}

// --- Employees ---

#[tokio::test]
async fn test_list_employees() {
    let response = app().oneshot(request("GET", "/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let raw: serde_json::Value = json_body(response).await;
    assert_eq!(
        raw,
        json!([{"firstName": "Jakub", "surname": "Stas", "employeeNumber": 1}])
    );
}
