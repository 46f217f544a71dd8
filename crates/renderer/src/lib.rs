//! Raster rendering of grids.
//!
//! Implements the rendering styles used by the grid viewer:
//! - Colour-mapped map overlays (rectangular and radial grids)
//! - Vertical cross-sections
//! - Contour bands
//!
//! Every renderer writes into an RGBA [`Bitmap`] which can be encoded as
//! PNG or handed to a [`RenderSurface`].

pub mod bands;
pub mod bitmap;
pub mod colour;
pub mod config;
pub mod cross_section;
pub mod error;
pub mod layer;
pub mod png;
pub mod radial;

pub use bands::render_contour_bands;
pub use bitmap::{Bitmap, RenderSurface};
pub use colour::{hex_to_rgb, Color, ColourScale, ColourStop, StyleDefinition};
pub use config::{RadialConfig, RasterConfig};
pub use cross_section::render_cross_section;
pub use error::{RenderError, Result};
pub use layer::{GridRasterLayer, GridSource};
pub use radial::RadialSource;
