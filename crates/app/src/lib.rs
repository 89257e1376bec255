//! # inimock-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** for the only mutable state of the mock:
//!   - `ScenarioRegistry` — device id → active scenario id
//! - Provide the **in-process registry** used by the daemon and by tests
//! - Provide the **dispatcher** use-case: one fixed handler per method
//!
//! ## Dependency rule
//! Depends on `inimock-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod registry;
pub mod services;
