use image::{Rgba, RgbaImage};

use crate::constants::palette;
use crate::draw;

/// Draw the layered app icon: indigo-purple glow disc, translucent white
/// plate, calendar card with grid, two completed-habit badges and an
/// in-progress dashed ring. All coordinates are fractions of the bounding
/// box, with fixed pixel values scaled from the 512px master design.
pub fn create_app_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    let s = size as f32 / 512.0;
    let center = (size / 2) as i64;
    let radius = (size as f32 * 0.4) as i64;

    draw::radial_glow(
        &mut img,
        center,
        center,
        radius,
        palette::INDIGO,
        palette::PURPLE,
    );

    // White plate behind the calendar
    let inner_radius = (radius as f32 * 0.6) as i64;
    draw::fill_circle(
        &mut img,
        center,
        center,
        inner_radius,
        Rgba([255, 255, 255, 200]),
    );

    // Calendar card
    let cal_w = (inner_radius as f32 * 0.8).round();
    let cal_h = (cal_w * 0.6).round();
    let cal_x = center as f32 - cal_w / 2.0;
    let cal_y = center as f32 - cal_h / 2.0;
    let corner = 15.0 * s;

    draw::fill_rounded_rect(
        &mut img,
        cal_x,
        cal_y,
        cal_x + cal_w,
        cal_y + cal_h,
        corner,
        palette::CARD_GRAY,
    );
    draw::stroke_rounded_rect(
        &mut img,
        cal_x,
        cal_y,
        cal_x + cal_w,
        cal_y + cal_h,
        corner,
        palette::INDIGO,
        3.0 * s,
    );

    // Header band
    let header_h = cal_h * 0.25;
    draw::fill_rounded_rect(
        &mut img,
        cal_x,
        cal_y,
        cal_x + cal_w,
        cal_y + header_h,
        corner,
        palette::INDIGO,
    );

    // Day grid: 5 columns, 4 rows
    let grid_top = cal_y + header_h + 10.0 * s;
    let grid_bottom = cal_y + cal_h - 10.0 * s;
    let grid_left = cal_x + 15.0 * s;
    let grid_right = cal_x + cal_w - 15.0 * s;
    for i in 1..6 {
        let x = grid_left + (grid_right - grid_left) * i as f32 / 5.0;
        draw::draw_line(&mut img, x, grid_top, x, grid_bottom, palette::GRID_GRAY, 2.0 * s);
    }
    for i in 1..5 {
        let y = grid_top + (grid_bottom - grid_top) * i as f32 / 4.0;
        draw::draw_line(&mut img, grid_left, y, grid_right, y, palette::GRID_GRAY, 2.0 * s);
    }

    // Completed habit, large badge
    let check_x = cal_x + cal_w / 4.0;
    draw::checkmark_badge(
        &mut img,
        check_x as i64,
        center,
        (20.0 * s) as i64,
        palette::GREEN,
        Some((palette::WHITE, (3.0 * s) as i64)),
        4.0 * s,
    );

    // Completed habit, small badge
    let small_x = cal_x + cal_w * 3.0 / 4.0;
    let small_y = center as f32 - 20.0 * s;
    draw::checkmark_badge(
        &mut img,
        small_x as i64,
        small_y as i64,
        (12.0 * s) as i64,
        palette::TEAL,
        Some((palette::WHITE, (2.0 * s) as i64)),
        2.0 * s,
    );

    // In-progress habit: dashed ring with a center dot
    let ring_y = center as f32 + 20.0 * s;
    draw::dashed_ring(&mut img, small_x, ring_y, 15.0 * s, 30, palette::AMBER, 3.0 * s);
    draw::fill_circle(
        &mut img,
        small_x as i64,
        ring_y as i64,
        (6.0 * s) as i64,
        palette::AMBER,
    );

    img
}
