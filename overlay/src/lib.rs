//! Screen-space projection of detection boxes for the word-cam overlay.
//!
//! A captured photo is rendered inside a fixed container with an
//! aspect-preserving "contain" fit, which letterboxes the image on one axis.
//! The detection backend reports bounding boxes in the photo's natural pixel
//! space; this crate maps those boxes into container-local screen coordinates
//! so the host view can draw a tappable rectangle over each detected object.
//! Everything here is pure math with no I/O and no shared state, recomputed
//! on every render pass.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Dimension, rect, and box types shared by the projection |
//! | [`fit`] | Contain-fit layout of an image inside a container |
//! | [`project`] | Box projection and per-render overlay derivation |
//! | [`hit`] | Hit-testing taps against projected overlay boxes |

pub mod fit;
pub mod geom;
pub mod hit;
pub mod project;
