//! Cache-control policies for HTTP handlers.

/// Fixture content only changes on redeploy.
pub const PUBLIC_CONTENT: &str = "public, max-age=300";

/// Gateway data is mutable and must never be served from a cache.
pub const NO_STORE: &str = "no-store";

/// Header tuple for fixture-backed content responses.
pub const fn public_content_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_CONTENT)
}

/// Header tuple for gateway responses.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
