use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(width, height, image::Rgb([40, 80, 120]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encode");
    bytes
}

// ===== MIME MAPPING =====

#[test]
fn known_extensions_map_to_image_types() {
    assert_eq!(mime_for_extension("jpg"), "image/jpeg");
    assert_eq!(mime_for_extension("jpeg"), "image/jpeg");
    assert_eq!(mime_for_extension("png"), "image/png");
    assert_eq!(mime_for_extension("gif"), "image/gif");
    assert_eq!(mime_for_extension("webp"), "image/webp");
}

#[test]
fn extension_matching_ignores_case() {
    assert_eq!(mime_for_extension("JPG"), "image/jpeg");
    assert_eq!(mime_for_extension("Png"), "image/png");
}

#[test]
fn unknown_extension_falls_back_to_octet_stream() {
    assert_eq!(mime_for_extension("bmp"), "application/octet-stream");
    assert_eq!(mime_for_extension(""), "application/octet-stream");
}

#[test]
fn path_mime_comes_from_the_extension() {
    assert_eq!(mime_for_path(Path::new("capture.png")), "image/png");
    assert_eq!(mime_for_path(Path::new("/tmp/shot.JPEG")), "image/jpeg");
}

#[test]
fn path_without_extension_falls_back_to_octet_stream() {
    assert_eq!(mime_for_path(Path::new("capture")), "application/octet-stream");
}

// ===== LOADING =====

#[test]
fn decodes_bytes_and_reports_dimensions() {
    let loaded = LoadedImage::from_bytes(png_bytes(6, 4), "image/png").expect("decode");

    assert_eq!(loaded.width(), 6);
    assert_eq!(loaded.height(), 4);
    assert_eq!(loaded.mime_type(), "image/png");
}

#[test]
fn wire_dimensions_match_the_pixels() {
    let loaded = LoadedImage::from_bytes(png_bytes(640, 480), "image/png").expect("decode");
    let dims = loaded.dimensions();

    assert_eq!(dims.width, 640);
    assert_eq!(dims.height, 480);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let result = LoadedImage::from_bytes(vec![0, 1, 2, 3], "image/png");

    assert!(matches!(result, Err(MediaError::Decode(_))));
}

#[test]
fn loads_from_a_file_and_picks_mime_from_the_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capture.png");
    std::fs::write(&path, png_bytes(3, 3)).expect("write");

    let loaded = LoadedImage::from_path(&path).expect("load");

    assert_eq!(loaded.width(), 3);
    assert_eq!(loaded.mime_type(), "image/png");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = LoadedImage::from_path(&dir.path().join("absent.png"));

    assert!(matches!(result, Err(MediaError::Io(_))));
}

// ===== ENCODING =====

#[test]
fn base64_round_trips_the_original_bytes() {
    let bytes = png_bytes(2, 2);
    let loaded = LoadedImage::from_bytes(bytes.clone(), "image/png").expect("decode");

    let decoded = STANDARD.decode(loaded.to_base64()).expect("base64");
    assert_eq!(decoded, bytes);
}

#[test]
fn data_url_carries_the_mime_prefix() {
    let loaded = LoadedImage::from_bytes(png_bytes(2, 2), "image/png").expect("decode");

    assert!(loaded.to_data_url().starts_with("data:image/png;base64,"));
}

#[test]
fn payload_pairs_base64_data_with_the_mime_type() {
    let loaded = LoadedImage::from_bytes(png_bytes(2, 2), "image/png").expect("decode");
    let payload = loaded.to_payload();

    assert_eq!(payload.inline_data.mime_type, "image/png");
    assert_eq!(payload.inline_data.data, loaded.to_base64());
}
