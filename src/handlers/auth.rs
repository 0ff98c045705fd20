use crate::middleware::auth::{clear_session_cookie, session_cookie};
use crate::{RosterError, router::RosterState};
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// POST /login -> sets the session cookie on success.
pub async fn login(
    State(state): State<RosterState>,
    jar: PrivateCookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<impl IntoResponse, RosterError> {
    let service = state.service.clone();
    let CredentialsForm { username, password } = form;
    let (ok, username) = blocking(move || {
        let ok = service.authenticate(&username, &password)?;
        Ok((ok, username))
    })
    .await?;
    if !ok {
        return Err(RosterError::InvalidCredentials);
    }
    info!(username = %username, "user logged in");
    let jar = jar.add(session_cookie(username.clone(), state.secure_cookie));
    Ok((jar, Json(json!({ "user": username }))))
}

/// POST /register
pub async fn register(
    State(state): State<RosterState>,
    Form(form): Form<CredentialsForm>,
) -> Result<impl IntoResponse, RosterError> {
    let service = state.service.clone();
    let CredentialsForm { username, password } = form;
    let username = blocking(move || service.register(&username, &password).map(|()| username))
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "user": username }))))
}

/// POST /logout
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    (jar.remove(clear_session_cookie()), StatusCode::NO_CONTENT)
}

/// Password hashing is CPU-bound; keep it off the async workers.
async fn blocking<T, F>(f: F) -> Result<T, RosterError>
where
    F: FnOnce() -> Result<T, RosterError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
