//! Caller identity supplied by the upstream authenticator.

use super::error::HttpError;
use crate::todo::domain::UserId;
use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header::HeaderMap};
use std::future::{Ready, ready};
use uuid::Uuid;

/// Header carrying the authenticated user's identifier.
pub const USER_HEADER: &str = "x-user-id";

/// Authenticated caller of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl CurrentUser {
    /// Reads the caller from request headers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Unauthenticated`] when the header is missing or
    /// is not a UUID.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, HttpError> {
        headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .map(|uuid| Self(UserId::from_uuid(uuid)))
            .ok_or(HttpError::Unauthenticated)
    }
}

impl FromRequest for CurrentUser {
    type Error = HttpError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_headers(request.headers()))
    }
}
