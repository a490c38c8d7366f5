use super::*;

fn two_tone(width: u32, height: u32) -> LoadedImage {
    let pixels = image::RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 { image::Rgb([200, 0, 0]) } else { image::Rgb([0, 0, 200]) }
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encode");
    LoadedImage::from_bytes(bytes, "image/png").expect("decode")
}

#[test]
fn crops_the_region_under_the_box() {
    let source = two_tone(8, 8);

    let crop = crop_to_box(&source, SourceBox::new(2.0, 2.0, 6.0, 6.0)).expect("crop");

    assert_eq!(crop.width, 4);
    assert_eq!(crop.height, 4);
}

#[test]
fn cropped_pixels_come_from_the_box_location() {
    let source = two_tone(8, 8);

    let crop = crop_to_box(&source, SourceBox::new(4.0, 0.0, 8.0, 8.0)).expect("crop");
    let decoded = image::load_from_memory(&crop.bytes).expect("decode crop");

    // The right half of the source is solid blue.
    assert_eq!(decoded.to_rgb8().get_pixel(0, 0), &image::Rgb([0, 0, 200]));
}

#[test]
fn fractional_coordinates_round_to_pixels() {
    let source = two_tone(10, 10);

    let crop = crop_to_box(&source, SourceBox::new(1.4, 1.6, 5.4, 6.6)).expect("crop");

    assert_eq!(crop.width, 4);
    assert_eq!(crop.height, 5);
}

#[test]
fn overhanging_box_is_clamped_to_the_image() {
    let source = two_tone(8, 8);

    let crop = crop_to_box(&source, SourceBox::new(-10.0, -10.0, 5.0, 5.0)).expect("crop");

    assert_eq!(crop.width, 5);
    assert_eq!(crop.height, 5);
}

#[test]
fn box_outside_the_image_is_an_empty_crop() {
    let source = two_tone(8, 8);

    let result = crop_to_box(&source, SourceBox::new(20.0, 20.0, 30.0, 30.0));

    assert!(matches!(result, Err(MediaError::EmptyCrop)));
}

#[test]
fn zero_width_box_is_an_empty_crop() {
    let source = two_tone(8, 8);

    let result = crop_to_box(&source, SourceBox::new(3.0, 1.0, 3.0, 5.0));

    assert!(matches!(result, Err(MediaError::EmptyCrop)));
}

#[test]
fn crop_bytes_are_png() {
    let source = two_tone(8, 8);

    let crop = crop_to_box(&source, SourceBox::new(0.0, 0.0, 4.0, 4.0)).expect("crop");

    assert!(crop.bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn payload_is_marked_as_png() {
    let source = two_tone(8, 8);

    let crop = crop_to_box(&source, SourceBox::new(0.0, 0.0, 4.0, 4.0)).expect("crop");
    let payload = crop.to_payload();

    assert_eq!(payload.inline_data.mime_type, CroppedImage::MIME_TYPE);
    assert_eq!(payload.inline_data.data, crop.to_base64());
}
