pub mod constants;
pub mod curve;
pub mod pad;
pub mod reveal;
pub mod spring;
pub mod starfield;
pub mod timeline;
pub mod typer;

pub use constants::*;

// Shaders bundled as string constants
pub static WAVES_WGSL: &str = include_str!("../../shaders/waves.wgsl");
