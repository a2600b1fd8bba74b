use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{AccountResponse, ErrorResponse, LoginRequest, SignupRequest};
use crate::routes::recommend::AppState;
use crate::routes::JsonOrForm;
use crate::services::AccountError;

/// Where the client goes after signing up or in
pub const NEXT_PAGE: &str = "/questions";

/// Configure account routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/signup", web::post().to(signup))
        .route("/login", web::post().to(login));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Register a student account
///
/// POST /api/v1/signup
///
/// Request body (JSON or form):
/// ```json
/// { "name": "string", "email": "string", "password": "string" }
/// ```
async fn signup(
    state: web::Data<AppState>,
    req: JsonOrForm<SignupRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for signup request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    match state.accounts.create_account(&req.name, &req.email, &req.password).await {
        Ok(account) => {
            tracing::info!("Registered account {} ({})", account.id, account.email);
            HttpResponse::Created().json(AccountResponse {
                account,
                next: NEXT_PAGE.to_string(),
            })
        }
        Err(AccountError::DuplicateEmail(email)) => {
            tracing::info!("Signup rejected, email already registered: {}", email);
            HttpResponse::Conflict().json(ErrorResponse {
                error: "Email already registered".to_string(),
                message: "Email already registered. Try logging in.".to_string(),
                status_code: 409,
            })
        }
        Err(e) => {
            tracing::error!("Failed to create account for {}: {}", req.email, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to create account".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Sign in with email and password
///
/// POST /api/v1/login
async fn login(
    state: web::Data<AppState>,
    req: JsonOrForm<LoginRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.accounts.authenticate(&req.email, &req.password).await {
        Ok(account) => {
            tracing::debug!("Login succeeded for {}", account.email);
            HttpResponse::Ok().json(AccountResponse {
                account,
                next: NEXT_PAGE.to_string(),
            })
        }
        Err(AccountError::InvalidCredentials) => {
            tracing::info!("Login failed for {}", req.email);
            HttpResponse::Unauthorized().json(ErrorResponse {
                error: "Invalid credentials".to_string(),
                message: "Invalid email or password. Please try again.".to_string(),
                status_code: 401,
            })
        }
        Err(e) => {
            tracing::error!("Failed to authenticate {}: {}", req.email, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to sign in".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
