use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Rasterize `svg_path` into a `size`x`size` PNG at `png_path`.
///
/// The drawing is scaled uniformly to fit the square and centered, so
/// non-square sources get transparent margins instead of distortion. Any
/// failure (missing file, malformed SVG, allocation) returns an error
/// before anything is written.
pub fn convert_svg_to_png(svg_path: &Path, png_path: &Path, size: u32) -> Result<()> {
    let svg_data = fs::read(svg_path)
        .with_context(|| format!("Failed to read {}", svg_path.display()))?;

    let mut options = usvg::Options::default();
    // Load system fonts so <text> elements in the SVG render
    Arc::make_mut(&mut options.fontdb).load_system_fonts();

    let tree = usvg::Tree::from_data(&svg_data, &options)
        .with_context(|| format!("Failed to parse {}", svg_path.display()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| anyhow!("Failed to allocate {}x{} pixmap", size, size))?;

    let scale = (size as f32 / tree.size().width()).min(size as f32 / tree.size().height());
    let tx = (size as f32 - tree.size().width() * scale) / 2.0;
    let ty = (size as f32 - tree.size().height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;
    Ok(())
}
