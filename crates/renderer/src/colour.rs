//! Colour scales: per-property lists of `(value, colour)` control points.
//!
//! Two on-disk formats are supported:
//!
//! - CSV, one `z,r,g,b` control point per line
//! - JSON style definitions with hex colour stops
//!
//! ```json
//! { "name": "Depth", "stops": [ { "value": 0.0, "color": "#FFFFCC" } ] }
//! ```

use crate::error::{RenderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    pub fn white() -> Self {
        Self::opaque(255, 255, 255)
    }
}

/// One control point of a colour scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourStop {
    pub value: f64,
    pub colour: Color,
}

/// A JSON style definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleDefinition {
    pub name: Option<String>,
    pub description: Option<String>,
    pub units: Option<String>,
    pub stops: Vec<StyleStop>,
}

/// Color stop of a style definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleStop {
    pub value: f64,
    pub color: String,
    pub label: Option<String>,
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

    Some((r, g, b))
}

/// Colour control points keyed by property name.
///
/// Lookup picks the control point nearest to the value. Points are kept in
/// load order and ties resolve to the earlier point.
#[derive(Debug, Clone, Default)]
pub struct ColourScale {
    properties: BTreeMap<String, Vec<ColourStop>>,
}

impl ColourScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the control points of `property`.
    pub fn insert(&mut self, property: impl Into<String>, stops: Vec<ColourStop>) {
        self.properties.insert(property.into(), stops);
    }

    /// Load `z,r,g,b` lines from a CSV file.
    pub fn load_csv(&mut self, property: &str, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let count = self.load_csv_str(property, &text)?;
        info!(property, path = %path.display(), stops = count, "Loaded colour scale");
        Ok(count)
    }

    /// Load `z,r,g,b` lines from CSV text.
    ///
    /// Lines without exactly four comma-separated tokens are skipped. Alpha
    /// is always 255. Returns the number of control points loaded.
    pub fn load_csv_str(&mut self, property: &str, text: &str) -> Result<usize> {
        let mut stops = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
            let [z, r, g, b] = tokens[..] else {
                debug!(line = index + 1, "Skipping colour scale line");
                continue;
            };

            let line_number = index + 1;
            let value: f64 = z
                .parse()
                .map_err(|_| RenderError::invalid_colour(line_number, format!("bad value '{}'", z)))?;
            let channel = |token: &str| -> Result<u8> {
                token.parse().map_err(|_| {
                    RenderError::invalid_colour(line_number, format!("bad channel '{}'", token))
                })
            };

            stops.push(ColourStop {
                value,
                colour: Color::opaque(channel(r)?, channel(g)?, channel(b)?),
            });
        }

        let count = stops.len();
        self.insert(property, stops);
        Ok(count)
    }

    /// Load the stops of a JSON style definition.
    pub fn load_style_json(&mut self, property: &str, json: &str) -> Result<usize> {
        let style: StyleDefinition = serde_json::from_str(json)?;

        let stops = style
            .stops
            .iter()
            .enumerate()
            .map(|(index, stop)| {
                let (r, g, b) = hex_to_rgb(&stop.color).ok_or_else(|| {
                    RenderError::invalid_colour(index + 1, format!("bad hex colour '{}'", stop.color))
                })?;
                Ok(ColourStop {
                    value: stop.value,
                    colour: Color::opaque(r, g, b),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            property,
            style = style.name.as_deref().unwrap_or("unnamed"),
            stops = stops.len(),
            "Loaded style definition"
        );
        let count = stops.len();
        self.insert(property, stops);
        Ok(count)
    }

    /// Load a JSON style definition from a file.
    pub fn load_style_file(&mut self, property: &str, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let count = self.load_style_json(property, &json)?;
        info!(property, path = %path.display(), stops = count, "Loaded colour style");
        Ok(count)
    }

    /// Colour of the control point nearest to `value`.
    ///
    /// `None` when the property is unknown or has no control points.
    pub fn colour(&self, property: &str, value: f64) -> Option<Color> {
        let stops = self.properties.get(property)?;
        let mut best: Option<(f64, Color)> = None;

        for stop in stops {
            let diff = (value - stop.value).abs();
            match best {
                Some((best_diff, _)) if !(diff < best_diff) => {}
                _ => best = Some((diff, stop.colour)),
            }
        }

        best.map(|(_, colour)| colour)
    }

    pub fn stops(&self, property: &str) -> Option<&[ColourStop]> {
        self.properties.get(property).map(Vec::as_slice)
    }

    /// Property names, sorted.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}
