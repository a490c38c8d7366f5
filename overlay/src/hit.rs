#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::{Point, ScreenBox};

/// Find the topmost overlay box containing the container-local point,
/// returning its index into `boxes`.
///
/// Overlays are drawn in slice order, so later entries sit on top and win
/// ties. Global tap coordinates are translated first via
/// [`crate::geom::LayoutRect::to_local`].
#[must_use]
pub fn hit_test(boxes: &[ScreenBox], local: Point) -> Option<usize> {
    boxes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, screen_box)| screen_box.contains(local))
        .map(|(index, _)| index)
}
