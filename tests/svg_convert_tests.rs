use std::fs;
use store_assets::svg::convert_svg_to_png;

const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="#667eea"/></svg>"##;

const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#ff0000"/></svg>"##;

#[test]
fn converts_svg_at_requested_size() {
    let dir = tempfile::tempdir().expect("temp dir");
    let svg_path = dir.path().join("icon.svg");
    let png_path = dir.path().join("icon.png");
    fs::write(&svg_path, SQUARE_SVG).expect("write svg");

    convert_svg_to_png(&svg_path, &png_path, 512).expect("conversion succeeds");

    let png = image::open(&png_path).expect("open png").to_rgba8();
    assert_eq!(png.dimensions(), (512, 512));

    let center = png.get_pixel(256, 256);
    assert_eq!(center.0[3], 255);
    assert!(center.0[2] > 200, "expected indigo fill, got {:?}", center);
}

#[test]
fn wide_svg_is_fit_and_centered_not_stretched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let svg_path = dir.path().join("wide.svg");
    let png_path = dir.path().join("wide.png");
    fs::write(&svg_path, WIDE_SVG).expect("write svg");

    convert_svg_to_png(&svg_path, &png_path, 512).expect("conversion succeeds");

    let png = image::open(&png_path).expect("open png").to_rgba8();
    assert_eq!(png.dimensions(), (512, 512));

    // 200x100 scales to 512x256, vertically centered in rows 128..384
    assert!(png.get_pixel(256, 256).0[0] > 200);
    assert_eq!(png.get_pixel(256, 40).0[3], 0, "top margin must stay transparent");
    assert_eq!(png.get_pixel(256, 480).0[3], 0, "bottom margin must stay transparent");
}

#[test]
fn missing_svg_returns_error_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let svg_path = dir.path().join("absent.svg");
    let png_path = dir.path().join("absent.png");

    let result = convert_svg_to_png(&svg_path, &png_path, 512);
    assert!(result.is_err());
    assert!(!png_path.exists());
}

#[test]
fn malformed_svg_returns_error_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let svg_path = dir.path().join("broken.svg");
    let png_path = dir.path().join("broken.png");
    fs::write(&svg_path, "this is not svg").expect("write file");

    let result = convert_svg_to_png(&svg_path, &png_path, 512);
    assert!(result.is_err());
    assert!(!png_path.exists());
}
