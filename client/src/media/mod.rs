//! Image handling for the word-cam flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `image` loads a capture, reports its natural dimensions, and produces
//! the base64 payloads the backend expects; `crop` cuts the region under a
//! detection box so descriptor requests carry only the object in question.

pub mod crop;
pub mod image;

pub use crop::{CroppedImage, crop_to_box};
pub use image::{LoadedImage, MediaError, mime_for_extension, mime_for_path};
