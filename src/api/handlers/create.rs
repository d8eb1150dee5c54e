//! Handler for the link creation endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::create::{CreateRequest, CreateResponse, MessageResponse};
use crate::application::services::CreateOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::RequestMeta;

pub const SLUG_EXISTS_MESSAGE: &str = "Slug already exists.";

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "slug": "promo" }
/// ```
///
/// `slug` is optional. The body is decoded as JSON whatever its content type.
///
/// # Response
///
/// - `200 {"slug", "link"}` for a new or already existing mapping
/// - `200 {"message": "Slug already exists."}` when the custom slug maps to another URL
/// - `400 {"message"}` for rejected input
/// - `500 {"message": "Internal server error."}` for undecodable bodies and datastore failures
pub async fn create_handler(
    State(state): State<AppState>,
    meta: RequestMeta,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: CreateRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedBody(e.to_string()))?;

    let response = match state.creator.create(payload.into(), &meta).await? {
        CreateOutcome::Created(short) | CreateOutcome::Existing(short) => {
            Json(CreateResponse::from(short)).into_response()
        }
        CreateOutcome::SlugTaken => Json(MessageResponse {
            message: SLUG_EXISTS_MESSAGE.to_string(),
        })
        .into_response(),
    };

    Ok(response)
}

/// Answers the CORS preflight for `/create` with an empty body.
///
/// The shared CORS headers are added by [`crate::api::middleware::cors::layer`].
pub async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        )],
    )
}
