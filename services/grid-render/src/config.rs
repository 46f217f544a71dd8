//! Command line configuration.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "grid-render")]
#[command(about = "Render ASCII grids to PNG map overlays, cross-sections and contour bands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, env = "GRID_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl Cli {
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

/// Colour scale selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Colour scale file: `z,r,g,b` CSV or a JSON style definition
    #[arg(long, env = "GRID_COLOUR_SCALE")]
    pub colours: PathBuf,

    /// Property the colour scale is registered under
    #[arg(long, env = "GRID_COLOUR_PROPERTY", default_value = "Temperature")]
    pub property: String,
}

/// Output image settings.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// PNG file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Colour-mapped map overlay of one grid
    Map {
        /// ASCII grid file
        grid: PathBuf,

        /// Payload and header delimiter
        #[arg(long, default_value_t = ' ')]
        delimiter: char,

        /// Paint negative values instead of leaving them transparent
        #[arg(long)]
        include_negative: bool,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Map overlay of radial grids around a centre point
    Radial {
        /// Centre as `lon,lat`
        #[arg(long, value_parser = parse_lon_lat)]
        centre: (f64, f64),

        /// Radial grid as `bearing:path`, columns in metres
        #[arg(long = "radial", value_parser = parse_keyed_path, required = true)]
        radials: Vec<(f64, PathBuf)>,

        /// Row coordinate sampled from every radial
        #[arg(long, default_value_t = 10.0)]
        sample_row: f64,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Vertical cross-section through grids at several depths
    Section {
        /// Horizontal grid as `depth:path`
        #[arg(long = "layer", value_parser = parse_keyed_path, required = true)]
        layers: Vec<(f64, PathBuf)>,

        /// Section start as `lon,lat`
        #[arg(long, value_parser = parse_lon_lat)]
        from: (f64, f64),

        /// Section end as `lon,lat`
        #[arg(long, value_parser = parse_lon_lat)]
        to: (f64, f64),

        /// Give every depth the same row height
        #[arg(long)]
        uniform_rows: bool,

        /// Print the depth profile of this section column
        #[arg(long)]
        profile: Option<usize>,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Contour bands, one pixel per cell
    Bands {
        /// ASCII grid file
        grid: PathBuf,

        /// Band thresholds, comma separated
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        trips: Vec<f64>,

        #[command(flatten)]
        style: StyleArgs,

        /// PNG file to write
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Map { .. } => "map",
            Command::Radial { .. } => "radial",
            Command::Section { .. } => "section",
            Command::Bands { .. } => "bands",
        }
    }
}

/// Parse `lon,lat`.
pub fn parse_lon_lat(s: &str) -> Result<(f64, f64), String> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected lon,lat, got '{}'", s))?;
    let lon = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon))?;
    let lat = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat))?;
    Ok((lon, lat))
}

/// Parse `key:path`, where the key is a depth or bearing.
pub fn parse_keyed_path(s: &str) -> Result<(f64, PathBuf), String> {
    let (key, path) = s
        .split_once(':')
        .ok_or_else(|| format!("expected value:path, got '{}'", s))?;
    let key = key
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}'", key))?;
    if path.is_empty() {
        return Err(format!("missing path in '{}'", s));
    }
    Ok((key, PathBuf::from(path)))
}
