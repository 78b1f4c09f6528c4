use anyhow::Result;
use clap::Parser;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use store_assets::config::Config;
use store_assets::constants::store as sizes;
use store_assets::store;
use store_assets::text::TextRenderer;

#[derive(Parser)]
#[command(name = "generate-store-images")]
#[command(about = "Compose the feature graphic and phone/tablet store canvases", long_about = None)]
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
    let out_dir = assets_dir.join(&config.output.store_images_dir);
    fs::create_dir_all(&out_dir)?;

    println!("🎨 Generating store images...");
    let text = TextRenderer::new();

    // One failed canvas must not stop the others
    save_image(
        "Feature graphic",
        store::feature_graphic(&config, &text),
        &out_dir.join(format!(
            "feature_graphic_{}x{}.png",
            sizes::FEATURE.0,
            sizes::FEATURE.1
        )),
    );
    save_image(
        "Phone screenshot",
        store::phone_screenshot(&config, &text),
        &out_dir.join(format!("phone_{}x{}.png", sizes::PHONE.0, sizes::PHONE.1)),
    );
    save_image(
        "7-inch tablet screenshot",
        store::tablet7_screenshot(&config, &text),
        &out_dir.join(format!(
            "tablet7_{}x{}.png",
            sizes::TABLET_7.0,
            sizes::TABLET_7.1
        )),
    );
    save_image(
        "10-inch tablet screenshot",
        store::tablet10_screenshot(&config, &text),
        &out_dir.join(format!(
            "tablet10_{}x{}.png",
            sizes::TABLET_10.0,
            sizes::TABLET_10.1
        )),
    );

    println!();
    println!("🎉 Store images saved to: {}", out_dir.display());
    println!("Upload them to the Play Console.");

    Ok(())
}

fn save_image(label: &str, image: Result<RgbaImage>, path: &Path) {
    let result = image.and_then(|img| img.save(path).map_err(anyhow::Error::from));
    match result {
        Ok(()) => println!("✅ {}: {}", label, path.display()),
        Err(e) => println!("❌ {} failed: {:#}", label, e),
    }
}
