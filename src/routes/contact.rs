use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ContactRequest, ContactResponse, ErrorResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(send_message));
}

/// Contact form endpoint; nothing is delivered, the message is echoed back
///
/// POST /api/v1/contact
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "phone": "string",
///   "country": "string",
///   "company": "string",
///   "interested": "string",
///   "message": "string"
/// }
/// ```
async fn send_message(req: web::Json<ContactRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let message_id = uuid::Uuid::new_v4().to_string();
    tracing::info!("Received contact message {} from {}", message_id, req.name);

    HttpResponse::Ok().json(ContactResponse {
        success: true,
        message_id,
        received_at: chrono::Utc::now(),
        submitted: req.into_inner(),
    })
}
