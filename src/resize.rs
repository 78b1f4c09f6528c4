use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::constants::palette;

/// Largest (width, height) with the source aspect ratio that fits inside the
/// target box. Scales both up and down; the binding dimension lands exactly
/// on the target, the other is rounded and never below 1.
pub fn fit_within(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    let scale_w = target_w as f64 / src_w as f64;
    let scale_h = target_h as f64 / src_h as f64;
    if scale_w <= scale_h {
        let h = (src_h as f64 * scale_w).round() as u32;
        (target_w, h.clamp(1, target_h))
    } else {
        let w = (src_w as f64 * scale_h).round() as u32;
        (w.clamp(1, target_w), target_h)
    }
}

/// Scale the source to fit, then center it on a solid canvas of exactly the
/// target size.
pub fn letterbox(src: &RgbaImage, target_w: u32, target_h: u32, background: Rgba<u8>) -> RgbaImage {
    let (w, h) = fit_within(src.width(), src.height(), target_w, target_h);
    let scaled = imageops::resize(src, w, h, FilterType::Lanczos3);

    let mut canvas = RgbaImage::from_pixel(target_w, target_h, background);
    let x = ((target_w - w) / 2) as i64;
    let y = ((target_h - h) / 2) as i64;
    imageops::overlay(&mut canvas, &scaled, x, y);
    canvas
}

/// Load a screenshot, letterbox it onto the brand background, and save the
/// result. A missing or unreadable input returns an error without writing.
pub fn resize_screenshot(input: &Path, output: &Path, target: (u32, u32)) -> Result<()> {
    let src = image::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?
        .to_rgba8();

    let canvas = letterbox(&src, target.0, target.1, palette::INDIGO);
    canvas
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
