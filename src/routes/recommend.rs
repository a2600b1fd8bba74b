use actix_web::{web, HttpResponse, Responder};
use crate::core::Matcher;
use crate::routes::JsonOrForm;
use crate::models::{CatalogResponse, HealthResponse, RecommendRequest, RecommendResponse, ScholarshipSummary};
use crate::services::AccountStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountStore>,
    pub matcher: Matcher,
}

/// Configure health, catalog and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/scholarships", web::get().to(list_scholarships))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.accounts.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    let registered_accounts = match state.accounts.count().await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!("Failed to count accounts: {}", e);
            None
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        registered_accounts,
        timestamp: chrono::Utc::now(),
    })
}

/// List the scholarship catalog
///
/// GET /api/v1/scholarships
async fn list_scholarships(state: web::Data<AppState>) -> impl Responder {
    let scholarships: Vec<ScholarshipSummary> = state
        .matcher
        .catalog()
        .iter()
        .map(ScholarshipSummary::from)
        .collect();

    HttpResponse::Ok().json(CatalogResponse {
        count: scholarships.len(),
        scholarships,
    })
}

/// Recommend scholarships from questionnaire answers
///
/// POST /api/v1/recommend
///
/// Accepts JSON or a url-encoded form. Every field is optional:
/// ```json
/// {
///   "school_type": "public",
///   "average": "95",
///   "financial_need": "yes",
///   "talent": "sports",
///   "university": "ateneo"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: JsonOrForm<RecommendRequest>,
) -> impl Responder {
    let profile = req.into_inner().to_profile();

    tracing::debug!("Scoring profile: {:?}", profile);

    let result = state.matcher.find_matches(&profile);

    tracing::info!(
        "Returning {} recommendations ({} scholarships matched)",
        result.matches.len(),
        result.total_matches
    );

    HttpResponse::Ok().json(RecommendResponse {
        matches: result.matches,
        total_matches: result.total_matches,
    })
}
