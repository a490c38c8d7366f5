#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in global or container-local screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Natural pixel size of a decoded image.
///
/// Both dimensions are strictly positive once the image has been decoded;
/// callers that have no decoded image yet pass `None` to the projection
/// entry points instead of a zero-sized value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDimensions {
    pub width: f64,
    pub height: f64,
}

impl ImageDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width-to-height ratio.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// On-screen size and position of the container an image is rendered into.
///
/// Produced by the host view's layout pass and replaced wholesale on resize
/// or rotation. `x` / `y` locate the container's top-left corner in global
/// screen coordinates; the scaling math uses only `width` and `height`, and
/// the origin exists so callers can translate global input events into
/// container-local space with [`LayoutRect::to_local`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl LayoutRect {
    #[must_use]
    pub fn new(width: f64, height: f64, x: f64, y: f64) -> Self {
        Self { width, height, x, y }
    }

    /// Width-to-height ratio.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Translate a global screen point into this container's local space.
    #[must_use]
    pub fn to_local(&self, global: Point) -> Point {
        Point { x: global.x - self.x, y: global.y - self.y }
    }
}

/// A detection bounding box in natural-image pixel space, as corner
/// coordinates.
///
/// The detection service promises `x1 < x2` and `y1 < y2`; the projection
/// does not enforce it and maps degenerate boxes as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl SourceBox {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// An overlay rectangle in container-local screen coordinates, ready for
/// absolute positioning.
///
/// Only meaningful relative to the exact image/container pair that produced
/// it; stale boxes from a previous layout must be recomputed, not reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenBox {
    /// Whether the container-local point `p` falls inside this box.
    /// Edges count as inside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}
