use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use store_assets::config::Config;
use store_assets::constants::{icon as icon_size, paths};
use store_assets::icon;

#[derive(Parser)]
#[command(name = "generate-icon")]
#[command(about = "Draw the DailyHabit app icon and save it as a 512x512 PNG", long_about = None)]
struct Cli {
    /// Directory the icon PNG is written to (default from config)
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

    println!("🎨 Drawing app icon...");
    let img = icon::create_app_icon(icon_size::SIZE);

    let png_file = assets_dir.join(paths::APP_ICON_PNG);
    img.save(&png_file)
        .with_context(|| format!("Failed to write {}", png_file.display()))?;

    println!("✅ Icon created!");
    if let Ok(absolute) = fs::canonicalize(&png_file) {
        println!("📁 Saved to: {}", absolute.display());
    }
    println!("📏 Size: {}x{}px", icon_size::SIZE, icon_size::SIZE);
    println!();
    println!("Upload this PNG to the Play Console.");

    Ok(())
}
