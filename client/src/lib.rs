//! Client-side core of the LingoLens language-learning app.
//!
//! The backend owns all intelligence (lesson generation, translation, object
//! detection); this crate owns everything a front-end needs to talk to it:
//! request plumbing, the persisted language pair, image handling for the
//! word-cam flow, and the per-capture session state that ties detections to
//! on-screen overlays.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`net`] | Backend HTTP client, configuration, and error types |
//! | [`state`] | Persisted source/target language pair |
//! | [`media`] | Image loading, MIME mapping, and detection-box cropping |
//! | [`session`] | Word-cam capture state and overlay derivation |

pub mod media;
pub mod net;
pub mod session;
pub mod state;
