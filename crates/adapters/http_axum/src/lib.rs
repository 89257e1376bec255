//! # inimock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the vendor-style RPC endpoint: every call arrives on `/` with a
//!   single `req` query parameter holding a URL-encoded JSON envelope
//! - Map the envelope into a dispatcher call (driving adapter)
//! - Map the result into `{"Status": 0, "Data": …}` or a `400` error body
//! - Serve `/health` as a liveness probe
//!
//! ## Dependency rule
//! Depends on `inimock-app` (for the port trait and the dispatcher) and
//! `inimock-domain` (for request/response types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
