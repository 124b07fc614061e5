use actix_web::{web, HttpResponse, Responder};
use crate::models::{DetailResponse, ErrorResponse, ExploreQuery, ExploreResponse, HealthResponse, RecommendationQuery};
use crate::services::CacheKey;
use crate::routes::AppState;

/// Configure destination routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations", web::get().to(explore))
        .route("/destinations/recommendations", web::get().to(recommendations))
        .route("/destinations/{place}", web::get().to(destination_detail));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.dataset.destinations.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        destinations: state.dataset.destinations.len(),
        hotels: state.dataset.hotels.len(),
        guides: state.dataset.guides.len(),
    })
}

/// Explore listing endpoint
///
/// GET /api/v1/destinations?q=lot&experience=Beach&activity=Photography&crowdness=Doesn't%20Matter&show=all
///
/// Unrecognized category values yield an empty listing.
async fn explore(
    state: web::Data<AppState>,
    query: web::Query<ExploreQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let cache_key = CacheKey::explore(&query);

    if let Ok(cached) = state.cache.get::<ExploreResponse>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let selection = query.selection();
    tracing::info!("Exploring destinations with selection: {:?}", selection);

    let page = state.explorer.explore_page(&state.dataset, &selection);

    let response = ExploreResponse {
        total_results: page.filtered.len(),
        destinations: page.filtered,
        top_recommendations: page.top_recommendations,
        show_all: query.show_all() || page.has_filters,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache explore response: {}", e);
    }

    HttpResponse::Ok().json(response)
}

/// Top recommendations endpoint
///
/// GET /api/v1/destinations/recommendations?limit=8
async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationQuery>,
) -> impl Responder {
    let limit = query
        .limit
        .unwrap_or(state.explorer.limits().recommendation_count);
    let cache_key = CacheKey::recommendations(limit);

    if let Ok(cached) = state.cache.get::<Vec<crate::models::Destination>>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let top = state.explorer.recommendations(&state.dataset, limit);

    if let Err(e) = state.cache.set(&cache_key, &top).await {
        tracing::warn!("Failed to cache recommendations: {}", e);
    }

    HttpResponse::Ok().json(top)
}

/// Destination detail endpoint
///
/// GET /api/v1/destinations/{place}
async fn destination_detail(
    state: web::Data<AppState>,
    place: web::Path<String>,
) -> impl Responder {
    let place = place.into_inner();
    let cache_key = CacheKey::detail(&place);

    if let Ok(cached) = state.cache.get::<DetailResponse>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let Some(page) = state.explorer.detail_page(&state.dataset, &place) else {
        tracing::info!("Destination not found: {}", place);
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Destination not found".to_string(),
            message: format!("No destination named '{}'", place),
            status_code: 404,
        });
    };

    let response = DetailResponse {
        destination: page.destination,
        reviews: page.reviews,
        hotels: page.hotels,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache detail response: {}", e);
    }

    HttpResponse::Ok().json(response)
}
