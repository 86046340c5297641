// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response headers for the map page and API.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Leaflet loads from unpkg; base map and label tiles from CARTO.
const MAP_CSP: &str = "default-src 'none'; \
     script-src 'self' https://unpkg.com; \
     style-src 'self' https://unpkg.com; \
     img-src 'self' data: https://*.basemaps.cartocdn.com https://unpkg.com; \
     connect-src 'self'; \
     frame-ancestors 'none'";

const MAP_HEADERS: [(&str, &str); 5] = [
    ("Content-Security-Policy", MAP_CSP),
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("Referrer-Policy", "no-referrer"),
    // The map never asks for the user's location
    ("Permissions-Policy", "camera=(), geolocation=(), microphone=(), payment=()"),
];

/// Attach [`MAP_HEADERS`] to every response.
pub async fn add_security_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in MAP_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}
