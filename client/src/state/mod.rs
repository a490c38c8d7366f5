//! Persisted user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only durable client state is the source/target language pair; every
//! request carries it, so it lives in one small JSON file instead of a
//! process-wide singleton. Callers load it once, pass it around by value,
//! and save after edits.

pub mod language;

pub use language::{LanguagePair, StoreError};
