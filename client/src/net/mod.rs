//! Networking for the lesson-generation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the backend endpoint and timeouts from the
//! environment, `types` defines the error surface and the [`Backend`]
//! trait, and `client` is the concrete reqwest implementation. Session and
//! CLI code depend on the trait so tests can swap in a mock backend.

pub mod client;
pub mod config;
pub mod types;

pub use client::LessonsClient;
pub use config::BackendConfig;
pub use types::{ApiError, Backend};
