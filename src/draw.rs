use image::{Rgba, RgbaImage};

/// Write a pixel if it lands inside the canvas. Every primitive clips here,
/// so callers can pass signed geometry that hangs off the edges.
pub fn put_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

pub fn fill_circle(img: &mut RgbaImage, cx: i64, cy: i64, r: i64, color: Rgba<u8>) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Fill the whole canvas with one color per row.
pub fn vertical_gradient<F>(img: &mut RgbaImage, color_at: F)
where
    F: Fn(u32) -> Rgba<u8>,
{
    for y in 0..img.height() {
        let color = color_at(y);
        for x in 0..img.width() {
            img.put_pixel(x, y, color);
        }
    }
}

fn in_rounded_rect(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32, px: f32, py: f32) -> bool {
    if px < x0 || px > x1 || py < y0 || py > y1 {
        return false;
    }
    // A corner radius larger than half the box degenerates to a capsule
    let radius = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0).max(0.0);
    let nx = px.clamp(x0 + radius, x1 - radius);
    let ny = py.clamp(y0 + radius, y1 - radius);
    let dx = px - nx;
    let dy = py - ny;
    dx * dx + dy * dy <= radius * radius
}

pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    fill: Rgba<u8>,
) {
    for y in y0.floor() as i64..=y1.ceil() as i64 {
        for x in x0.floor() as i64..=x1.ceil() as i64 {
            if in_rounded_rect(x0, y0, x1, y1, radius, x as f32, y as f32) {
                put_pixel(img, x, y, fill);
            }
        }
    }
}

/// Border of a rounded rectangle, drawn inward from the edge.
pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
    width: f32,
) {
    for y in y0.floor() as i64..=y1.ceil() as i64 {
        for x in x0.floor() as i64..=x1.ceil() as i64 {
            let px = x as f32;
            let py = y as f32;
            let on_border = in_rounded_rect(x0, y0, x1, y1, radius, px, py)
                && !in_rounded_rect(
                    x0 + width,
                    y0 + width,
                    x1 - width,
                    y1 - width,
                    (radius - width).max(0.0),
                    px,
                    py,
                );
            if on_border {
                put_pixel(img, x, y, color);
            }
        }
    }
}

/// Thick line segment, filled by distance test over its bounding box.
pub fn draw_line(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Rgba<u8>,
    width: f32,
) {
    let half = width / 2.0;
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;

    let min_x = (x0.min(x1) - half).floor() as i64;
    let max_x = (x0.max(x1) + half).ceil() as i64;
    let min_y = (y0.min(y1) - half).floor() as i64;
    let max_y = (y0.max(y1) + half).ceil() as i64;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32;
            let py = y as f32;
            // Closest point on the segment to (px, py)
            let t = if len_sq > 0.0 {
                (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let cx = x0 + t * dx;
            let cy = y0 + t * dy;
            let ddx = px - cx;
            let ddy = py - cy;
            if ddx * ddx + ddy * ddy <= half * half {
                put_pixel(img, x, y, color);
            }
        }
    }
}

/// Concentric overwrite rings: brightest alpha at the rim, sqrt falloff
/// inward, and the color switches to `core` inside 70% of the radius.
pub fn radial_glow(
    img: &mut RgbaImage,
    cx: i64,
    cy: i64,
    radius: i64,
    rim: Rgba<u8>,
    core: Rgba<u8>,
) {
    let mut i = radius;
    while i > 0 {
        let t = i as f32 / radius as f32;
        let alpha = (255.0 * t.sqrt()) as u8;
        let base = if t < 0.7 { core } else { rim };
        fill_circle(img, cx, cy, i, Rgba([base.0[0], base.0[1], base.0[2], alpha]));
        i -= 2;
    }
}

/// Two-segment tick mark. Proportions come from the 40px master glyph:
/// (-8,0) -> (-2,6) -> (8,-4), scaled by radius/20. The glyph is fully
/// proportional, so badges near but not at r=20 get slightly shorter
/// strokes than a fixed ±8px layout would give (r=18 draws ±7.2px).
pub fn checkmark(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>, width: f32) {
    let s = radius / 20.0;
    draw_line(img, cx - 8.0 * s, cy, cx - 2.0 * s, cy + 6.0 * s, color, width);
    draw_line(
        img,
        cx - 2.0 * s,
        cy + 6.0 * s,
        cx + 8.0 * s,
        cy - 4.0 * s,
        color,
        width,
    );
}

/// Filled circle with an optional inward ring and a white tick.
pub fn checkmark_badge(
    img: &mut RgbaImage,
    cx: i64,
    cy: i64,
    radius: i64,
    fill: Rgba<u8>,
    outline: Option<(Rgba<u8>, i64)>,
    tick_width: f32,
) {
    match outline {
        Some((ring, ring_width)) => {
            fill_circle(img, cx, cy, radius, ring);
            fill_circle(img, cx, cy, radius - ring_width, fill);
        }
        None => fill_circle(img, cx, cy, radius, fill),
    }
    checkmark(
        img,
        cx as f32,
        cy as f32,
        radius as f32,
        Rgba([255, 255, 255, 255]),
        tick_width,
    );
}

/// Dashed circle: one short radial dash per `step_degrees`.
pub fn dashed_ring(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    step_degrees: u32,
    color: Rgba<u8>,
    width: f32,
) {
    let mut angle = 0;
    while angle < 360 {
        let (sin, cos) = (angle as f32).to_radians().sin_cos();
        draw_line(
            img,
            cx + (radius - 2.0) * cos,
            cy + (radius - 2.0) * sin,
            cx + radius * cos,
            cy + radius * sin,
            color,
            width,
        );
        angle += step_degrees;
    }
}
