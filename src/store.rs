use anyhow::Result;
use image::{Rgba, RgbaImage};

use crate::config::Config;
use crate::constants::{palette, store};
use crate::draw;
use crate::text::TextRenderer;

const TITLE_COLOR: (u8, u8, u8) = (255, 255, 255);

/// Indigo-to-violet ramp drawn behind every store canvas.
fn gradient_canvas(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let h = height;
    draw::vertical_gradient(&mut img, |y| {
        Rgba([
            (102 + y * 16 / h) as u8,
            (126 + y * 20 / h) as u8,
            (234 - y * 40 / h) as u8,
            255,
        ])
    });
    img
}

/// Mocked habit-list UI: rounded rows with a done-badge and label.
fn draw_habit_list(img: &mut RgbaImage, habits: &[String], text: &TextRenderer) -> Result<()> {
    let width = img.width() as f32;
    let margin = 60.0;
    let box_h = 80.0;

    for (i, habit) in habits.iter().enumerate() {
        let top = margin + i as f32 * (box_h + 20.0);
        let left = margin;
        let right = width - margin;
        let bottom = top + box_h;

        draw::fill_rounded_rect(img, left, top, right, bottom, 20.0, palette::WHITE);
        draw::stroke_rounded_rect(img, left, top, right, bottom, 20.0, palette::INDIGO, 3.0);

        let cx = left + 40.0;
        let cy = top + box_h / 2.0;
        draw::checkmark_badge(img, cx as i64, cy as i64, 18, palette::GREEN, None, 4.0);

        text.draw_left(img, habit, cx + 30.0, (cy - 18.0) as u32, 32, palette::INK)?;
    }
    Ok(())
}

pub fn feature_graphic(config: &Config, text: &TextRenderer) -> Result<RgbaImage> {
    let (w, h) = store::FEATURE;
    let mut img = gradient_canvas(w, h);
    text.draw_centered(&mut img, &config.branding.app_name, 80, 90, TITLE_COLOR)?;
    text.draw_centered(&mut img, &config.branding.tagline, 200, 44, TITLE_COLOR)?;
    draw_habit_list(&mut img, &config.branding.habits, text)?;
    Ok(img)
}

pub fn phone_screenshot(config: &Config, text: &TextRenderer) -> Result<RgbaImage> {
    let (w, h) = store::PHONE;
    let mut img = gradient_canvas(w, h);
    text.draw_centered(&mut img, &config.branding.phone_headline, 80, 64, TITLE_COLOR)?;
    draw_habit_list(&mut img, &config.branding.habits, text)?;
    Ok(img)
}

pub fn tablet7_screenshot(config: &Config, text: &TextRenderer) -> Result<RgbaImage> {
    let (w, h) = store::TABLET_7;
    let mut img = gradient_canvas(w, h);
    text.draw_centered(&mut img, &config.branding.tablet7_headline, 80, 72, TITLE_COLOR)?;
    draw_habit_list(&mut img, &config.branding.habits, text)?;
    Ok(img)
}

pub fn tablet10_screenshot(config: &Config, text: &TextRenderer) -> Result<RgbaImage> {
    let (w, h) = store::TABLET_10;
    let mut img = gradient_canvas(w, h);
    text.draw_centered(&mut img, &config.branding.tablet10_headline, 120, 96, TITLE_COLOR)?;
    draw_habit_list(&mut img, &config.branding.habits, text)?;
    Ok(img)
}
