// Route exports
pub mod account;
pub mod contact;
pub mod explore;
pub mod guides;
pub mod itinerary;

use actix_web::web;
use std::sync::Arc;
use std::time::Duration;
use crate::core::Explorer;
use crate::models::Dataset;
use crate::services::{AuthService, CacheManager, FavoritesService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub explorer: Explorer,
    pub cache: Arc<CacheManager>,
    pub favorites: Arc<FavoritesService>,
    pub auth: Arc<AuthService>,
    pub itinerary_delay: Duration,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(explore::configure)
            .configure(guides::configure)
            .configure(itinerary::configure)
            .configure(account::configure)
            .configure(contact::configure),
    );
}
