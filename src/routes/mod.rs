// Route exports
pub mod accounts;
pub mod payload;
pub mod recommend;

pub use payload::{form_config, json_config, JsonError, JsonOrForm};
pub use recommend::AppState;

use actix_web::web;

/// Configure all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(payload::json_config())
            .app_data(payload::form_config())
            .configure(recommend::configure)
            .configure(accounts::configure),
    );
}
