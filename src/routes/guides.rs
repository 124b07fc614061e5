use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::search_guides;
use crate::models::{ErrorResponse, GuideApplicationRequest, GuideApplicationResponse, GuideSearchQuery, GuidesResponse};
use crate::services::CacheKey;
use crate::routes::AppState;

/// Configure tour guide routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/guides", web::get().to(list_guides))
        .route("/guides/apply", web::post().to(apply_as_guide));
}

/// Tour guide search endpoint
///
/// GET /api/v1/guides?q=japanese
async fn list_guides(
    state: web::Data<AppState>,
    query: web::Query<GuideSearchQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let cache_key = CacheKey::guides(&query);

    if let Ok(cached) = state.cache.get::<GuidesResponse>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let guides = search_guides(&state.dataset.guides, query.q.as_deref().unwrap_or(""));
    tracing::debug!("Guide search {:?} returned {} guides", query.q, guides.len());

    let response = GuidesResponse {
        total_results: guides.len(),
        guides,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache guide search: {}", e);
    }

    HttpResponse::Ok().json(response)
}

/// Tour guide application endpoint
///
/// POST /api/v1/guides/apply
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "contact": "string",
///   "language": "string",
///   "price": "string",
///   "description": "string",
///   "picture": "string",
///   "cvFileName": "string"
/// }
/// ```
async fn apply_as_guide(req: web::Json<GuideApplicationRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Please complete all required fields (Name, Contact, CV).".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let application_id = uuid::Uuid::new_v4().to_string();
    tracing::info!("Received guide application {} from {}", application_id, req.name);

    HttpResponse::Ok().json(GuideApplicationResponse {
        success: true,
        application_id,
        received_at: chrono::Utc::now(),
    })
}
