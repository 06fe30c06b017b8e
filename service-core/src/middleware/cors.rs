use tower_http::cors::{Any, CorsLayer};

/// CORS layer allowing every origin, method and header.
///
/// Browser and mobile clients call the API from arbitrary origins; nothing
/// behind it is credentialed.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
