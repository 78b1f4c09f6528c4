use store_assets::constants::icon::SIZE;
use store_assets::icon::create_app_icon;

#[test]
fn icon_has_requested_dimensions() {
    let img = create_app_icon(SIZE);
    assert_eq!(img.dimensions(), (SIZE, SIZE));
}

#[test]
fn icon_renders_at_small_sizes_too() {
    for size in [16, 32, 64, 128] {
        let img = create_app_icon(size);
        assert_eq!(img.dimensions(), (size, size));
    }
}

#[test]
fn icon_is_not_blank() {
    let img = create_app_icon(SIZE);
    let painted = img.pixels().filter(|p| p.0[3] > 0).count();
    // The glow disc alone covers ~130k pixels at 512
    assert!(painted > 50_000, "only {} painted pixels", painted);
}

#[test]
fn icon_corners_stay_transparent() {
    let img = create_app_icon(SIZE);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(SIZE - 1, 0).0[3], 0);
    assert_eq!(img.get_pixel(0, SIZE - 1).0[3], 0);
    assert_eq!(img.get_pixel(SIZE - 1, SIZE - 1).0[3], 0);
}

#[test]
fn icon_center_is_the_calendar_card() {
    let img = create_app_icon(SIZE);
    let center = img.get_pixel(SIZE / 2, SIZE / 2);
    // Card fill or a grid line, either way light and opaque
    assert_eq!(center.0[3], 255);
    assert!(center.0[0] >= 180, "unexpected center pixel {:?}", center);
}

#[test]
fn white_plate_overwrites_the_glow_instead_of_blending() {
    let img = create_app_icon(SIZE);
    // (256, 350) is on the translucent plate, below the calendar card and
    // clear of the badges. Overwrite compositing stores the fill verbatim;
    // blending over the opaque glow would have produced alpha 255.
    let plate = img.get_pixel(SIZE / 2, 350);
    assert_eq!(plate.0, [255, 255, 255, 200]);
}

#[test]
fn icon_generation_is_deterministic() {
    let first = create_app_icon(SIZE);
    let second = create_app_icon(SIZE);
    assert_eq!(first.as_raw(), second.as_raw());
}
