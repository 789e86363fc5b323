use crate::config::CorsConfig;
use actix_cors::Cors;

pub fn create_cors(config: &CorsConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        // the frontend sends the Authorization header
        .supports_credentials()
        .max_age(3600)
}
