use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::generate_itinerary;
use crate::models::{ErrorResponse, ItineraryRequest, ItineraryResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/itinerary", web::post().to(create_itinerary));
}

/// Itinerary generator endpoint
///
/// POST /api/v1/itinerary
///
/// Request body:
/// ```json
/// {
///   "place": "string",
///   "days": 3
/// }
/// ```
async fn create_itinerary(
    state: web::Data<AppState>,
    req: web::Json<ItineraryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tokio::time::sleep(state.itinerary_delay).await;

    let plan = generate_itinerary(&req.place, req.days);
    tracing::info!("Generated {}-day itinerary for {}", plan.days, plan.place);

    HttpResponse::Ok().json(ItineraryResponse {
        place: plan.place,
        days: plan.days,
        itinerary: plan.text,
    })
}
