//! Handler for link shortening endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::IntoResponse,
};
use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Creates (or returns the existing) short URL for the URL in the request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// The raw original URL, nothing else:
///
/// ```text
/// https://example.com/some/page
/// ```
///
/// # Response
///
/// `201 Created`, `Content-Type: text/plain`, body is the short URL built from
/// the configured scheme, the request's `Host`, and the code:
///
/// ```text
/// http://localhost:8080/Ab3dE5gH
/// ```
///
/// Saving the same URL again answers `201` with the same short URL.
///
/// # Errors
///
/// - 400 Bad Request for an empty or invalid URL, or no `Host` header and no URI authority
/// - 500 Internal Server Error if the random source fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let host = extract_host(&headers, &uri)?;

    let code = state.store.save(&body).map_err(|e| {
        if e.is_client_error() {
            warn!(error = %e, "Rejected URL");
        } else {
            error!(error = %e, "Short code generation failed");
        }
        AppError::from(e)
    })?;

    let short_url = state.short_url(&host, code.as_str());
    debug!(code = %code, original_url = %body, "Short URL issued");

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain")],
        short_url,
    ))
}
