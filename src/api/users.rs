//! `/users` endpoints. Bodies are JSON; avatars are uploaded as `multipart/form-data`
//! (file in the `avatar` field) and served back as PNG bytes.

use super::AppState;
use crate::model::{User, UserCreate, UserList, UserUpdate};
use crate::user_actor::UserError;
use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

const APPLICATION_XML: &str = "application/xml";
const AVATAR_FIELD: &str = "avatar";
const IMAGE_PNG: &str = "image/png";
const USER_ALLOW: &str = "GET, PUT, OPTIONS";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).options(collection_options),
        )
        .route(
            "/users/{user_name}",
            get(get_user).put(update_user).options(item_options),
        )
        .route(
            "/users/{user_name}/avatar",
            get(get_avatar).put(put_avatar).options(item_options),
        )
}

/// GET /users
async fn list_users(State(state): State<AppState>) -> Result<Json<UserList>, UserError> {
    let mut users = state.users.get_all().await?;
    users.sort_by(|a, b| a.user_name.cmp(&b.user_name));
    Ok(Json(UserList::new(users)))
}

/// POST /users
async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserCreate>,
) -> Result<impl IntoResponse, UserError> {
    let user = state.users.create_user(input).await?;
    let name = &user.user_name;
    let headers = [
        (header::LOCATION, format!("users/{name}")),
        (
            header::LINK,
            format!(
                r#"<users/{name}>; rel="update"; type="{APPLICATION_XML}", <users>; rel="listAll"; type="{APPLICATION_XML}""#
            ),
        ),
    ];
    Ok((StatusCode::CREATED, headers, Json(user)))
}

/// OPTIONS /users
async fn collection_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET, POST, OPTIONS")])
}

/// GET /users/{user_name}
async fn get_user(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<User>, UserError> {
    state
        .users
        .find_by_user_name(&user_name)
        .await?
        .map(Json)
        .ok_or(UserError::NotFound(user_name))
}

/// PUT /users/{user_name}
async fn update_user(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>, UserError> {
    Ok(Json(state.users.update_user(&user_name, update).await?))
}

/// OPTIONS /users/{user_name} and /users/{user_name}/avatar
async fn item_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, USER_ALLOW)])
}

/// GET /users/{user_name}/avatar
///
/// 204 when the user exists but has no avatar yet.
async fn get_avatar(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Response, UserError> {
    Ok(match state.users.avatar(&user_name).await? {
        Some(bytes) => ([(header::CONTENT_TYPE, IMAGE_PNG)], bytes).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// PUT /users/{user_name}/avatar
///
/// Multipart form with the image in the `avatar` field. Other fields are ignored.
async fn put_avatar(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UserError> {
    let bytes = avatar_field(&mut multipart).await?;
    state.users.update_avatar(&user_name, &bytes[..]).await?;
    Ok((
        StatusCode::OK,
        [(header::LOCATION, format!("users/{user_name}/avatar"))],
    ))
}

/// Reads the `avatar` part of the form. A broken or missing part is an I/O failure.
async fn avatar_field(multipart: &mut Multipart) -> Result<Bytes, UserError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UserError::Io(e.to_string()))?
    {
        if field.name() == Some(AVATAR_FIELD) {
            return field.bytes().await.map_err(|e| UserError::Io(e.to_string()));
        }
    }
    Err(UserError::Io(format!("missing `{AVATAR_FIELD}` form field")))
}
