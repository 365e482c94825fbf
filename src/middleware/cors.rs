use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer from the configured allowlists.
///
/// A `*` entry in a list becomes a wildcard. Credentials are only allowed
/// when no list is a wildcard, since tower-http rejects that combination.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard_origins = is_wildcard(&config.allowed_origins);
    let wildcard_methods = is_wildcard(&config.allowed_methods);
    let wildcard_headers = is_wildcard(&config.allowed_headers);

    let mut layer = CorsLayer::new();

    layer = if wildcard_origins {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    };

    layer = if wildcard_methods {
        layer.allow_methods(Any)
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|method| method.parse().ok())
            .collect();
        layer.allow_methods(methods)
    };

    layer = if wildcard_headers {
        layer.allow_headers(Any)
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        layer.allow_headers(headers)
    };

    if !wildcard_origins && !wildcard_methods && !wildcard_headers {
        layer = layer.allow_credentials(true);
    }

    layer
}

fn is_wildcard(list: &[String]) -> bool {
    list.iter().any(|item| item == "*")
}
