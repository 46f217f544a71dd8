//! Configuration for raster layers.

use serde::{Deserialize, Serialize};

/// Configuration for rasterising a grid layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Maximum bitmap width in pixels.
    pub max_width: usize,

    /// Maximum bitmap height in pixels.
    pub max_height: usize,

    /// Colour scale property used to colour cells.
    pub property: String,

    /// Leave negative samples transparent.
    pub skip_negative: bool,

    /// Zoom factor beyond which a cached bitmap is re-rendered.
    pub zoom_hysteresis: f64,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            max_width: 1200,
            max_height: 800,
            property: "Temperature".to_string(),
            skip_negative: true,
            zoom_hysteresis: 2.0,
        }
    }
}

impl RasterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GRID_MAX_BITMAP_WIDTH") {
            if let Ok(width) = val.parse() {
                config.max_width = width;
            }
        }

        if let Ok(val) = std::env::var("GRID_MAX_BITMAP_HEIGHT") {
            if let Ok(height) = val.parse() {
                config.max_height = height;
            }
        }

        if let Ok(val) = std::env::var("GRID_COLOUR_PROPERTY") {
            config.property = val;
        }

        if let Ok(val) = std::env::var("GRID_SKIP_NEGATIVE") {
            config.skip_negative = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_width == 0 {
            return Err("max_width must be > 0".to_string());
        }

        if self.max_height == 0 {
            return Err("max_height must be > 0".to_string());
        }

        if !(self.zoom_hysteresis >= 1.0) {
            return Err("zoom_hysteresis must be >= 1".to_string());
        }

        Ok(())
    }
}

/// Configuration for a radial grid source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialConfig {
    /// Latitude of the central point.
    pub centre_lat: f64,

    /// Longitude of the central point.
    pub centre_lon: f64,

    /// Row-axis coordinate sampled from every radial grid.
    pub sample_row: f64,
}

impl RadialConfig {
    pub fn new(centre_lat: f64, centre_lon: f64) -> Self {
        Self {
            centre_lat,
            centre_lon,
            ..Self::default()
        }
    }
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            centre_lat: 0.0,
            centre_lon: 0.0,
            sample_row: 10.0,
        }
    }
}
