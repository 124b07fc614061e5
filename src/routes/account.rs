use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, FavoritesResponse, LoginRequest, LoginResponse, LogoutRequest, LogoutResponse, SessionQuery,
    SessionResponse, ToggleFavoriteRequest, ToggleFavoriteResponse,
};
use crate::services::AuthError;
use crate::routes::AppState;

/// Configure login and favorites routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::post().to(login))
        .route("/auth/logout", web::post().to(logout))
        .route("/auth/register", web::post().to(register))
        .route("/auth/session", web::get().to(current_session))
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/toggle", web::post().to(toggle_favorite));
}

fn validation_error(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

fn store_error(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Not logged in".to_string(),
        message: "Please log in with the demo account first.".to_string(),
        status_code: 401,
    })
}

/// Resolve a session to an error response unless it is open
async fn require_session(state: &AppState, session: &str) -> Result<(), HttpResponse> {
    if session.is_empty() {
        return Err(unauthorized());
    }

    match state.auth.is_authenticated(session).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::debug!("Rejected unknown session {}", session);
            Err(unauthorized())
        }
        Err(e) => Err(store_error("Failed to check session", e)),
    }
}

/// Demo login endpoint
///
/// POST /api/v1/auth/login
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors.to_string());
    }

    match state.auth.login(&req.username, &req.password).await {
        Ok(session) => HttpResponse::Ok().json(LoginResponse {
            session,
            username: req.username.clone(),
        }),
        Err(AuthError::InvalidCredentials) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Login failed".to_string(),
            message: AuthError::InvalidCredentials.to_string(),
            status_code: 401,
        }),
        Err(e) => store_error("Failed to open session", e),
    }
}

/// End a session; favorites stay stored under it
///
/// POST /api/v1/auth/logout
async fn logout(
    state: web::Data<AppState>,
    req: web::Json<LogoutRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors.to_string());
    }

    match state.auth.logout(&req.session).await {
        Ok(logged_out) => HttpResponse::Ok().json(LogoutResponse { logged_out }),
        Err(e) => store_error("Failed to close session", e),
    }
}

/// Registration endpoint, always refused
///
/// POST /api/v1/auth/register
async fn register(state: web::Data<AppState>) -> impl Responder {
    let message = match state.auth.register() {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    };

    HttpResponse::Forbidden().json(ErrorResponse {
        error: "Registration disabled".to_string(),
        message,
        status_code: 403,
    })
}

/// Who is logged in under a session
///
/// GET /api/v1/auth/session?session={session}
async fn current_session(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> impl Responder {
    if query.session.is_empty() {
        return unauthorized();
    }

    match state.auth.username(&query.session).await {
        Ok(Some(username)) => HttpResponse::Ok().json(SessionResponse {
            session: query.session.clone(),
            username,
        }),
        Ok(None) => unauthorized(),
        Err(e) => store_error("Failed to read session", e),
    }
}

/// Favorites of a session
///
/// GET /api/v1/favorites?session={session}
async fn list_favorites(
    state: web::Data<AppState>,
    query: web::Query<SessionQuery>,
) -> impl Responder {
    if let Err(response) = require_session(&state, &query.session).await {
        return response;
    }

    let places = match state.favorites.list(&query.session).await {
        Ok(places) => places,
        Err(e) => return store_error("Failed to read favorites", e),
    };

    let destinations = state.explorer.favorites(&state.dataset, &places);

    HttpResponse::Ok().json(FavoritesResponse {
        places,
        destinations,
    })
}

/// Add or remove a favorite
///
/// POST /api/v1/favorites/toggle
///
/// Request body:
/// ```json
/// {
///   "session": "string",
///   "place": "string"
/// }
/// ```
async fn toggle_favorite(
    state: web::Data<AppState>,
    req: web::Json<ToggleFavoriteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors.to_string());
    }

    if let Err(response) = require_session(&state, &req.session).await {
        return response;
    }

    match state.favorites.toggle(&req.session, &req.place).await {
        Ok(added) => HttpResponse::Ok().json(ToggleFavoriteResponse {
            place: req.place.clone(),
            added,
        }),
        Err(e) => store_error("Failed to update favorites", e),
    }
}
