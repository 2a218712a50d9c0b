use clap::Parser;
use once_cell::sync::Lazy;

/// Command-line configuration. Fixed for the lifetime of the window.
#[derive(Parser, Debug)]
#[command(name = "tiny-pixel-pad", about = "A tiny pixel-art drawing pad")]
pub struct Config {
    /// Grid columns
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..=256))]
    pub width: u32,

    /// Grid rows
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..=256))]
    pub height: u32,

    /// On-screen device pixels per grid cell
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub pixel_size: u32,
}

// Parsed lazily so the macroquad window configuration, which runs before
// main's body, sees the same instance.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::parse);
