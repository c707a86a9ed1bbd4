//! Host extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header, uri::Authority};

/// Extracts the serving host of a request.
///
/// The `Host` header wins when present. HTTP/2 requests may carry the host
/// only in the `:authority` pseudo-header, which ends up in the request URI,
/// so the URI authority is the fallback.
///
/// Unlike a bare domain lookup, the port is kept: the host is used verbatim as
/// the authority of generated short URLs, so a service reached at
/// `localhost:8080` hands out `http://localhost:8080/{code}`.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value is not valid UTF-8
/// - The value is not a valid URI authority, or carries userinfo
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let host = extract_host(&headers, &Uri::from_static("/")).unwrap();
/// assert_eq!(host, "example.com:8080");
/// ```
pub fn extract_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let authority: Authority = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?
            .parse()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?,
        None => uri
            .authority()
            .cloned()
            .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
    };

    // Userinfo has no place in a served host.
    if authority.as_str().contains('@') {
        return Err(AppError::bad_request("Invalid Host header"));
    }

    Ok(authority.as_str().to_string())
}
