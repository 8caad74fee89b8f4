//! Main entry point for the CityInfo backend.
//!
//! This file initializes logging, loads configuration, sets up the database
//! connection, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

use std::sync::Arc;

use cityinfo_adapters::{CloudMailService, LocalMailService, Notifier};
use tracing_subscriber::EnvFilter;

use cityinfo_backend::auth::service::AuthService;
use cityinfo_backend::config::{AppConfig, MailServiceKind};
use cityinfo_backend::database::queries::CityInfoRepository;
use cityinfo_backend::state::AppState;
use cityinfo_backend::{app_router, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::connect(&config.database_url).await?;
    database::init_schema(&pool).await?;
    database::seed_demo_data(&pool).await?;

    let notifier: Arc<dyn Notifier> = match config.mail.service {
        MailServiceKind::Local => Arc::new(LocalMailService::new(
            config.mail.mail_from.clone(),
            config.mail.mail_to.clone(),
        )),
        MailServiceKind::Cloud => Arc::new(CloudMailService::new(
            config.mail.mail_from.clone(),
            config.mail.mail_to.clone(),
        )),
    };

    let addr = config.listen_addr;
    let state = AppState {
        auth: AuthService::new(config.auth.clone()),
        repository: CityInfoRepository::new(pool),
        notifier,
        config: Arc::new(config),
    };

    let app = app_router(state);

    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cityinfo_backend=debug,tower_http=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}
