/// Application-wide constants for asset geometry, colors, and file names

pub mod icon {
    /// Play Console requires the app icon at exactly 512x512
    pub const SIZE: u32 = 512;
}

pub mod store {
    /// Feature graphic shown at the top of the listing (width, height)
    pub const FEATURE: (u32, u32) = (1024, 500);

    /// Phone screenshot slot
    pub const PHONE: (u32, u32) = (1080, 1920);

    /// 7-inch tablet screenshot slot
    pub const TABLET_7: (u32, u32) = (1200, 1920);

    /// 10-inch tablet screenshot slot
    pub const TABLET_10: (u32, u32) = (1600, 2560);
}

pub mod palette {
    use image::Rgba;

    /// Brand indigo, also the letterbox background
    pub const INDIGO: Rgba<u8> = Rgba([102, 126, 234, 255]);
    /// Secondary purple at the core of the icon glow
    pub const PURPLE: Rgba<u8> = Rgba([118, 75, 162, 255]);
    /// Completed-habit green
    pub const GREEN: Rgba<u8> = Rgba([40, 167, 69, 255]);
    /// Secondary completed-habit teal
    pub const TEAL: Rgba<u8> = Rgba([23, 162, 184, 255]);
    /// In-progress amber
    pub const AMBER: Rgba<u8> = Rgba([255, 193, 7, 255]);
    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    /// Calendar card fill
    pub const CARD_GRAY: Rgba<u8> = Rgba([240, 240, 240, 255]);
    /// Calendar grid lines
    pub const GRID_GRAY: Rgba<u8> = Rgba([200, 200, 200, 255]);
    /// Habit label text
    pub const INK: (u8, u8, u8) = (60, 60, 60);
}

pub mod paths {
    /// Hand-drawn vector icon, if present
    pub const APP_ICON_SVG: &str = "app_icon_512x512.svg";
    /// Rasterized icon uploaded to the Play Console
    pub const APP_ICON_PNG: &str = "app_icon_512x512.png";
}
