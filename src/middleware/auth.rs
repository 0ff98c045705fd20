use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use time::Duration;

use crate::error::RosterError;

pub const SESSION_COOKIE: &str = "roster_session";

/// The logged-in username, taken from the encrypted session cookie.
/// Handlers that take this extractor reject anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct RequireLogin(pub String);

impl<S> FromRequestParts<S> for RequireLogin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = RosterError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| RosterError::Unauthorized)?;
        jar.get(SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .filter(|user| !user.is_empty())
            .map(Self)
            .ok_or(RosterError::Unauthorized)
    }
}

pub fn session_cookie(username: String, secure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, username))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(12))
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
