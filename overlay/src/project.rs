#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use crate::fit::ContainFit;
use crate::geom::{ImageDimensions, LayoutRect, ScreenBox, SourceBox};

/// Project a detection box into container-local screen coordinates.
///
/// Returns `None` while either input is still unknown (image not decoded
/// yet, container not laid out yet). That is the expected state on early
/// render passes, not an error; callers skip the overlay for now and retry
/// on the next pass once both values exist.
#[must_use]
pub fn project(
    source: SourceBox,
    image: Option<ImageDimensions>,
    container: Option<LayoutRect>,
) -> Option<ScreenBox> {
    let fit = ContainFit::compute(image?, container?);
    Some(fit.apply(source))
}

/// Project every detection box for one render pass.
///
/// Returns an empty vec while inputs are missing, otherwise one screen box
/// per source box, index-aligned with the input. Results are only valid for
/// the exact `image` / `container` pair given, so callers recompute on every
/// layout change instead of caching.
#[must_use]
pub fn overlay_boxes(
    sources: &[SourceBox],
    image: Option<ImageDimensions>,
    container: Option<LayoutRect>,
) -> Vec<ScreenBox> {
    let (Some(image), Some(container)) = (image, container) else {
        return Vec::new();
    };
    let fit = ContainFit::compute(image, container);
    sources.iter().map(|source| fit.apply(*source)).collect()
}
