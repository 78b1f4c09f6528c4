use anyhow::{Context, Result};
use image::{imageops, RgbaImage};
use std::sync::Arc;

/// Rasterizes headline and label text by routing it through the SVG
/// pipeline, the one place the toolchain already shapes glyphs from system
/// fonts. A machine with no usable font gets blank overlays and a warning
/// instead of an error.
pub struct TextRenderer {
    options: usvg::Options<'static>,
}

impl TextRenderer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        // usvg 0.45: fontdb lives inside Options as an Arc<Database>
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        if options.fontdb.is_empty() {
            eprintln!("⚠️  No system fonts found, text will be left out");
        }
        TextRenderer { options }
    }

    /// Center `text` horizontally with its top edge at `y`.
    pub fn draw_centered(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        y: u32,
        font_size: u32,
        color: (u8, u8, u8),
    ) -> Result<()> {
        let x = canvas.width() as f32 / 2.0;
        self.draw(canvas, text, x, y, font_size, color, "middle")
    }

    /// Left-align `text` at `x` with its top edge at `y`.
    pub fn draw_left(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        y: u32,
        font_size: u32,
        color: (u8, u8, u8),
    ) -> Result<()> {
        self.draw(canvas, text, x, y, font_size, color, "start")
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        y: u32,
        font_size: u32,
        color: (u8, u8, u8),
        anchor: &str,
    ) -> Result<()> {
        if text.is_empty() || self.options.fontdb.is_empty() {
            return Ok(());
        }

        let (width, height) = canvas.dimensions();
        // The baseline sits roughly 80% of the em below the top edge
        let baseline = y as f32 + font_size as f32 * 0.8;
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\
             <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-family=\"sans-serif\" \
             font-size=\"{}\" fill=\"rgb({},{},{})\">{}</text></svg>",
            width,
            height,
            x,
            baseline,
            anchor,
            font_size,
            color.0,
            color.1,
            color.2,
            escape_xml(text),
        );

        let tree = usvg::Tree::from_str(&svg, &self.options)
            .context("Failed to build text overlay")?;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .context("Failed to allocate text overlay")?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let mut data = pixmap.take();
        demultiply_alpha(&mut data);
        let overlay = RgbaImage::from_raw(width, height, data)
            .context("Text overlay buffer size mismatch")?;
        imageops::overlay(canvas, &overlay, 0, 0);
        Ok(())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// tiny-skia pixmaps hold premultiplied RGBA; `image` expects straight alpha.
fn demultiply_alpha(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a > 0 && a < 255 {
            for c in px[..3].iter_mut() {
                *c = ((*c as u16 * 255) / a).min(255) as u8;
            }
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
