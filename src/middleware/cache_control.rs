use axum::http::{header, HeaderName, HeaderValue};

/// Header `Cache-Control` para respuestas memorizadas durante `ttl` segundos
pub fn public_max_age(ttl: u64) -> [(HeaderName, HeaderValue); 1] {
    let value = HeaderValue::from_str(&format!("public, max-age={}", ttl))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));
    [(header::CACHE_CONTROL, value)]
}
