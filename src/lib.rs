// Library exports for testing
pub mod config;
pub mod constants;
pub mod draw;
pub mod icon;
pub mod resize;
pub mod store;
pub mod svg;
pub mod text;
