//! Handlers for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::{debug, warn};

use crate::domain::entities::ShortCode;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{*code}`
///
/// Everything after the leading `/` is taken as the code, so `/a/b` and
/// `/abcdefgh/` are looked up as `a/b` and `abcdefgh/` and answer 400 like any
/// other unknown code.
///
/// # Errors
///
/// Returns 400 Bad Request with a plain-text message if the code is unknown.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    resolve(&state, &code)
}

/// Handles `GET /`, i.e. a request carrying an empty code.
///
/// Always answers 400 Bad Request.
pub async fn redirect_root_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    resolve(&state, "")
}

fn resolve(state: &AppState, code: &str) -> Result<Redirect, AppError> {
    let original_url = state.store.resolve(code).map_err(|e| {
        warn!(
            code = %code,
            well_formed = ShortCode::is_well_formed(code),
            error = %e,
            "Short code lookup failed"
        );
        AppError::from(e)
    })?;

    debug!(code = %code, "Redirecting");
    Ok(Redirect::temporary(&original_url))
}
