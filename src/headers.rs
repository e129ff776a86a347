//! Fixed response header set
//!
//! Every response leaving the server carries the same security, CORS, and
//! cache-control headers. This module owns the list and the single place
//! where it gets appended.

use hyper::http::response::Builder;

/// Headers appended to every response, in this order.
///
/// `X-Frame-Options` is intentionally absent so the served content can be
/// embedded in frames on other origins.
pub const RESPONSE_HEADERS: [(&str, &str); 7] = [
    // Security headers
    ("X-Content-Type-Options", "nosniff"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
    (
        "Permissions-Policy",
        "accelerometer=(), autoplay=(), clipboard-write=(), encrypted-media=(), gyroscope=(), picture-in-picture=()",
    ),
    // CORS headers
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET"),
    // Caching headers
    ("Cache-Control", "no-store, no-cache, must-revalidate"),
];

/// Append the fixed header set to a response builder.
///
/// Called by every response builder after status and content headers are
/// set, immediately before the body is attached.
pub fn apply(builder: Builder) -> Builder {
    RESPONSE_HEADERS
        .iter()
        .fold(builder, |b, (name, value)| b.header(*name, *value))
}
