use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use store_assets::config::Config;
use store_assets::constants::{icon, paths};
use store_assets::svg;

#[derive(Parser)]
#[command(name = "convert-icon")]
#[command(about = "Rasterize the app icon SVG into the 512x512 Play Store PNG", long_about = None)]
struct Cli {
    /// Directory holding the icon SVG and receiving the PNG (default from config)
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let assets_dir = cli
        .assets_dir
        .unwrap_or_else(|| PathBuf::from(&config.output.assets_dir));
    fs::create_dir_all(&assets_dir)?;

    let svg_file = assets_dir.join(paths::APP_ICON_SVG);
    let png_file = assets_dir.join(paths::APP_ICON_PNG);

    if !svg_file.exists() {
        println!("❌ SVG file not found: {}", svg_file.display());
        return Ok(());
    }

    match svg::convert_svg_to_png(&svg_file, &png_file, icon::SIZE) {
        Ok(()) => {
            println!("✅ Converted: {}", png_file.display());
            println!();
            println!("🎉 Icon conversion complete!");
            if let Ok(absolute) = fs::canonicalize(&png_file) {
                println!("📁 Saved to: {}", absolute.display());
            }
            println!("📏 Size: {}x{}px", icon::SIZE, icon::SIZE);
            println!();
            println!("Upload this PNG to the Play Console.");
        }
        Err(e) => {
            println!("❌ Conversion failed: {:#}", e);
        }
    }

    Ok(())
}
