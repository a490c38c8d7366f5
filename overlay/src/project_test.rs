#![allow(clippy::float_cmp)]

use super::*;

fn image_wide() -> ImageDimensions {
    ImageDimensions::new(200.0, 100.0)
}

fn container_square() -> LayoutRect {
    LayoutRect::new(100.0, 100.0, 0.0, 0.0)
}

// --- not-ready gate ---

#[test]
fn returns_none_without_image_dimensions() {
    let result = project(SourceBox::new(0.0, 0.0, 10.0, 10.0), None, Some(container_square()));
    assert!(result.is_none());
}

#[test]
fn returns_none_without_layout_rect() {
    let result = project(SourceBox::new(0.0, 0.0, 10.0, 10.0), Some(image_wide()), None);
    assert!(result.is_none());
}

#[test]
fn returns_none_when_nothing_is_ready() {
    assert!(project(SourceBox::new(0.0, 0.0, 10.0, 10.0), None, None).is_none());
}

// --- letterboxed projection ---

#[test]
fn wider_image_letterboxes_top_and_bottom() {
    let screen = project(
        SourceBox::new(0.0, 0.0, 200.0, 100.0),
        Some(image_wide()),
        Some(container_square()),
    );
    assert_eq!(screen, Some(ScreenBox { left: 0.0, top: 25.0, width: 100.0, height: 50.0 }));
}

#[test]
fn taller_image_letterboxes_left_and_right() {
    let screen = project(
        SourceBox::new(0.0, 0.0, 100.0, 200.0),
        Some(ImageDimensions::new(100.0, 200.0)),
        Some(container_square()),
    );
    assert_eq!(screen, Some(ScreenBox { left: 25.0, top: 0.0, width: 50.0, height: 100.0 }));
}

#[test]
fn sub_box_lands_inside_rendered_area() {
    let screen = project(
        SourceBox::new(50.0, 25.0, 150.0, 75.0),
        Some(image_wide()),
        Some(container_square()),
    );
    assert_eq!(screen, Some(ScreenBox { left: 25.0, top: 37.5, width: 50.0, height: 25.0 }));
}

#[test]
fn equal_aspects_scale_uniformly_with_no_offset() {
    let screen = project(
        SourceBox::new(0.0, 0.0, 100.0, 100.0),
        Some(ImageDimensions::new(100.0, 100.0)),
        Some(LayoutRect::new(50.0, 50.0, 0.0, 0.0)),
    );
    assert_eq!(screen, Some(ScreenBox { left: 0.0, top: 0.0, width: 50.0, height: 50.0 }));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let source = SourceBox::new(13.7, 42.3, 155.5, 99.1);
    let first = project(source, Some(image_wide()), Some(container_square()));
    let second = project(source, Some(image_wide()), Some(container_square()));
    assert_eq!(first, second);
}

#[test]
fn out_of_bounds_box_passes_through_unclamped() {
    let screen = project(
        SourceBox::new(180.0, 80.0, 260.0, 140.0),
        Some(image_wide()),
        Some(container_square()),
    );
    // Right/bottom overshoot in image space stays an overshoot on screen.
    assert_eq!(screen, Some(ScreenBox { left: 90.0, top: 65.0, width: 40.0, height: 30.0 }));
}

// --- overlay_boxes ---

#[test]
fn overlay_boxes_empty_until_ready() {
    let sources = [SourceBox::new(0.0, 0.0, 10.0, 10.0)];
    assert!(overlay_boxes(&sources, None, Some(container_square())).is_empty());
    assert!(overlay_boxes(&sources, Some(image_wide()), None).is_empty());
}

#[test]
fn overlay_boxes_align_with_input_indices() {
    let sources = [
        SourceBox::new(0.0, 0.0, 200.0, 100.0),
        SourceBox::new(50.0, 25.0, 150.0, 75.0),
    ];
    let boxes = overlay_boxes(&sources, Some(image_wide()), Some(container_square()));
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0], ScreenBox { left: 0.0, top: 25.0, width: 100.0, height: 50.0 });
    assert_eq!(boxes[1], ScreenBox { left: 25.0, top: 37.5, width: 50.0, height: 25.0 });
}

#[test]
fn overlay_boxes_match_single_projection() {
    let sources = [SourceBox::new(10.0, 10.0, 90.0, 60.0)];
    let boxes = overlay_boxes(&sources, Some(image_wide()), Some(container_square()));
    let single = project(sources[0], Some(image_wide()), Some(container_square()));
    assert_eq!(single, Some(boxes[0]));
}

#[test]
fn overlay_boxes_empty_input_gives_empty_output() {
    let boxes = overlay_boxes(&[], Some(image_wide()), Some(container_square()));
    assert!(boxes.is_empty());
}
