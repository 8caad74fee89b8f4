//! Shared application state handed to every request handler.
//!
//! Built once at startup and cloned per request by the router; everything in
//! here is cheap to clone (pool-backed repository, key material, `Arc`s).

use std::sync::Arc;

use cityinfo_adapters::Notifier;

use crate::auth::service::AuthService;
use crate::config::AppConfig;
use crate::database::queries::CityInfoRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: CityInfoRepository,
    pub auth: AuthService,
    pub notifier: Arc<dyn Notifier>,
}
