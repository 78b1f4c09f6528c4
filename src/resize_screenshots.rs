use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use store_assets::config::Config;
use store_assets::constants::store as sizes;
use store_assets::resize;

#[derive(Parser)]
#[command(name = "resize-screenshots")]
#[command(about = "Letterbox hand-captured screenshots to the exact Play Store sizes", long_about = None)]
struct Cli {
    /// Base assets directory (default from config)
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let assets_dir = cli
        .assets_dir
        .unwrap_or_else(|| PathBuf::from(&config.output.assets_dir));
    let out_dir = assets_dir.join(&config.output.screenshots_dir);
    fs::create_dir_all(&out_dir)?;

    // Captures are picked up from the working directory
    let jobs: [(&str, (u32, u32)); 4] = [
        ("screenshot_phone.png", sizes::PHONE),
        ("screenshot_tablet7.png", sizes::TABLET_7),
        ("screenshot_tablet10.png", sizes::TABLET_10),
        ("screenshot_feature.png", sizes::FEATURE),
    ];

    for (input_name, (w, h)) in jobs {
        let input = Path::new(input_name);
        if !input.exists() {
            println!("⚠️  File not found: {}", input_name);
            continue;
        }

        let stem = input_name.trim_end_matches(".png");
        let output = out_dir.join(format!("{}_{}x{}.png", stem, w, h));
        match resize::resize_screenshot(input, &output, (w, h)) {
            Ok(()) => println!("✅ Resized: {}", output.display()),
            Err(e) => println!("❌ Error: {:#}", e),
        }
    }

    println!();
    println!("📝 Capture checklist:");
    println!("  1. screenshot_phone.png - phone-sized capture");
    println!("  2. screenshot_tablet7.png - 7-inch tablet capture");
    println!("  3. screenshot_tablet10.png - 10-inch tablet capture");
    println!("  4. screenshot_feature.png - landscape capture");
    println!();
    println!("🎉 Done! Saved to: {}", out_dir.display());

    Ok(())
}
