use mimalloc::MiMalloc;
use roster::db::{CredentialStore, RecordStore};
use roster::router::{RosterState, roster_router};
use roster::service::RosterService;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &roster::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        data_file = %cfg.data_file.display(),
        users_file = %cfg.users_file.display(),
        loglevel = %cfg.loglevel,
        insecure_cookie = cfg.insecure_cookie
    );

    let service = RosterService::new(
        RecordStore::new(&cfg.data_file),
        CredentialStore::new(&cfg.users_file),
    );
    service.bootstrap(&cfg.admin_password)?;

    if cfg.session_secret.is_none() {
        warn!("ROSTER_SESSION_SECRET not set; sessions will not survive a restart");
    }

    let state = RosterState::new(service, cfg.session_secret.as_deref(), cfg.insecure_cookie);
    let app = roster_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
