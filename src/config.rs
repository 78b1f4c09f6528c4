use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional per-project overrides, read from the working directory. Every
/// field falls back to the shipping DailyHabit copy, so running without a
/// config file reproduces the stock listing assets.
pub const CONFIG_FILE: &str = "store-assets.yaml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrandingConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_phone_headline")]
    pub phone_headline: String,
    #[serde(default = "default_tablet7_headline")]
    pub tablet7_headline: String,
    #[serde(default = "default_tablet10_headline")]
    pub tablet10_headline: String,
    /// Labels shown in the mocked habit list, top to bottom
    #[serde(default = "default_habits")]
    pub habits: Vec<String>,
}

fn default_app_name() -> String {
    "DailyHabit".to_string()
}

fn default_tagline() -> String {
    "毎日をもっと良くする習慣アプリ".to_string()
}

fn default_phone_headline() -> String {
    "毎日の習慣を記録".to_string()
}

fn default_tablet7_headline() -> String {
    "習慣を可視化".to_string()
}

fn default_tablet10_headline() -> String {
    "大画面で快適に管理".to_string()
}

fn default_habits() -> Vec<String> {
    ["朝のストレッチ", "水を飲む", "日記を書く", "英語学習", "瞑想"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        BrandingConfig {
            app_name: default_app_name(),
            tagline: default_tagline(),
            phone_headline: default_phone_headline(),
            tablet7_headline: default_tablet7_headline(),
            tablet10_headline: default_tablet10_headline(),
            habits: default_habits(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_store_images_dir")]
    pub store_images_dir: String,
    #[serde(default = "default_screenshots_dir")]
    pub screenshots_dir: String,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_store_images_dir() -> String {
    "store_images".to_string()
}

fn default_screenshots_dir() -> String {
    "store_screenshots".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            assets_dir: default_assets_dir(),
            store_images_dir: default_store_images_dir(),
            screenshots_dir: default_screenshots_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branding: BrandingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .context("Failed to read config file")?;
            let config: Config = serde_yaml::from_str(&contents)
                .context("Failed to parse config file")?;

            // Validate configuration after loading
            config.validate()?;

            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.branding.app_name.is_empty() {
            bail!("app_name cannot be empty");
        }
        if self.branding.habits.is_empty() {
            bail!("habit list cannot be empty");
        }

        if self.output.assets_dir.is_empty() {
            bail!("assets_dir cannot be empty");
        }
        if self.output.store_images_dir.is_empty() {
            bail!("store_images_dir cannot be empty");
        }
        if self.output.screenshots_dir.is_empty() {
            bail!("screenshots_dir cannot be empty");
        }

        Ok(())
    }
}
