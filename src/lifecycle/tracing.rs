//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); actor log lines carry
//! an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown`, with the store size
//! - **Registry Operations**: every request at debug, mutations at info, rejections at warn
//! - **HTTP Requests**: one span per request from `tower_http`'s `TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Every registry request, including payloads
//! RUST_LOG=debug cargo run
//!
//! # Quiet the HTTP layer
//! RUST_LOG=debug,tower_http=warn cargo run
//! ```
//!
//! With `RUST_LOG=info` a product create looks like:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=2
//! INFO Created entity_type="Product" id=prod3 size=3
//! WARN Create failed entity_type="Product" error=Item already exists: prod3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
