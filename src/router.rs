use crate::handlers::{auth, students};
use crate::service::RosterService;
use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

#[derive(Clone)]
pub struct RosterState {
    pub service: RosterService,
    pub key: Key,
    pub secure_cookie: bool,
}

impl RosterState {
    pub fn new(service: RosterService, session_secret: Option<&str>, insecure_cookie: bool) -> Self {
        Self {
            service,
            key: session_key(session_secret),
            secure_cookie: !insecure_cookie,
        }
    }
}

impl FromRef<RosterState> for Key {
    fn from_ref(state: &RosterState) -> Self {
        state.key.clone()
    }
}

/// Cookie keys need 64 bytes; a configured secret of any length is stretched
/// through SHA-512 so restarts keep existing sessions valid.
fn session_key(secret: Option<&str>) -> Key {
    match secret.filter(|s| !s.is_empty()) {
        Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
        None => Key::generate(),
    }
}

pub fn roster_router(state: RosterState) -> Router {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/departments", get(students::departments))
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/{id}",
            get(students::show)
                .put(students::update)
                .delete(students::remove),
        )
        .route("/dashboard", get(students::dashboard))
        .with_state(state)
}
