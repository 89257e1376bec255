//! # inimock-domain
//!
//! Pure domain model for the Inim Cloud mock server.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **request envelope** (`{"Method": …, "Params": …}`) and the
//!   closed set of **methods** the mock understands
//! - Define the **response envelope** and every method-specific payload
//! - Hold the read-only **device catalog** (one device, three scenarios)
//! - Extract typed parameters from the loosely typed `Params` map
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Mutable state lives behind a port trait in the `app` crate.

pub mod error;
pub mod id;

pub mod device;
pub mod method;
pub mod request;
pub mod response;
