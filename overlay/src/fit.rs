#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use crate::geom::{ImageDimensions, LayoutRect, ScreenBox, SourceBox};

/// Resolved "contain" layout of one image inside one container.
///
/// The image fills one container axis exactly and is centered on the other,
/// leaving letterbox bars. `scale_x` and `scale_y` come out equal in value
/// (aspect is preserved) but are derived independently per axis so each
/// output coordinate traces back to one branch of the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainFit {
    /// On-screen width of the drawn image.
    pub rendered_width: f64,
    /// On-screen height of the drawn image.
    pub rendered_height: f64,
    /// Width of the left letterbox bar.
    pub offset_x: f64,
    /// Height of the top letterbox bar.
    pub offset_y: f64,
    /// Image-pixel to screen-pixel factor on the x axis.
    pub scale_x: f64,
    /// Image-pixel to screen-pixel factor on the y axis.
    pub scale_y: f64,
}

impl ContainFit {
    /// Resolve the contain fit of `image` inside `container`.
    ///
    /// Both dimension pairs must be strictly positive; callers gate on input
    /// availability before computing (see [`crate::project::project`]).
    /// Equal aspect ratios take the height-fill branch, where the horizontal
    /// offset degenerates to zero, so the result is continuous across the
    /// branch boundary.
    #[must_use]
    pub fn compute(image: ImageDimensions, container: LayoutRect) -> Self {
        let image_aspect = image.aspect();

        let fills_width = image_aspect > container.aspect();
        let (rendered_width, rendered_height, offset_x, offset_y) = if fills_width {
            // Image is relatively wider: fill the container width, center vertically.
            let rendered_height = container.width / image_aspect;
            (container.width, rendered_height, 0.0, (container.height - rendered_height) / 2.0)
        } else {
            // Image is relatively taller, or aspects match: fill the height, center horizontally.
            let rendered_width = container.height * image_aspect;
            (rendered_width, container.height, (container.width - rendered_width) / 2.0, 0.0)
        };

        Self {
            rendered_width,
            rendered_height,
            offset_x,
            offset_y,
            scale_x: rendered_width / image.width,
            scale_y: rendered_height / image.height,
        }
    }

    /// Map a detection box through this fit into container-local screen
    /// coordinates.
    ///
    /// No clamping: a box outside the image bounds maps to a screen rect
    /// outside the visible container. Callers that need clipping do it
    /// themselves.
    #[must_use]
    pub fn apply(&self, source: SourceBox) -> ScreenBox {
        ScreenBox {
            left: source.x1 * self.scale_x + self.offset_x,
            top: source.y1 * self.scale_y + self.offset_y,
            width: source.width() * self.scale_x,
            height: source.height() * self.scale_y,
        }
    }
}
