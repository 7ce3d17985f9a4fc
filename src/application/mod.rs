//! Application layer containing the sales analysis logic and its orchestration.
//!
//! `engine` holds the pure computations over a borrowed dataset. `service`
//! wires uploads, the session's dataset store and the engine together.

pub mod engine;
pub mod service;
