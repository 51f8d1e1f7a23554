/// Request extractors
use crate::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use registry_core::Username;

/// Header checked first for the username
pub const PRIMARY_USERNAME_HEADER: &str = "x-username";

/// Header checked when the primary one is absent or empty
pub const FALLBACK_USERNAME_HEADER: &str = "username";

/// Username supplied through the `X-Username` or `Username` header
///
/// The first header holding a non-blank value wins. Values are decoded as
/// UTF-8, so non-ASCII usernames verify the same way they were registered;
/// invalid byte sequences are replaced rather than skipped, keeping a present
/// primary header authoritative. Rejects with [`ApiError::MissingParameter`]
/// when neither header has a value.
#[derive(Debug, Clone)]
pub struct UsernameHeader(pub Username);

impl UsernameHeader {
    pub fn username(&self) -> &Username {
        &self.0
    }

    /// Resolve the username from request headers, honouring header precedence
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        [PRIMARY_USERNAME_HEADER, FALLBACK_USERNAME_HEADER]
            .into_iter()
            .filter_map(|name| headers.get(name))
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .find_map(|value| Username::parse(value).ok())
            .map(Self)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for UsernameHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).ok_or_else(ApiError::missing_username_header)
    }
}
