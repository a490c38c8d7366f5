//! Capture session state for the word-cam flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is created per capture and dropped when the next capture
//! replaces it, so selection and detection state never leak between
//! frames. Overlay geometry is derived from the current layout on every
//! call instead of being stored.

pub mod wordcam;

pub use wordcam::{SessionError, WordCamSession};
