//! Raster layers: a grid rendered to a cached, colour-mapped bitmap.
//!
//! ```text
//! draw(projector, view, surface)
//!      │
//!      ├─► extent(projector)            grid envelope in device units
//!      │
//!      ├─► rect_intersects(view, extent)?   no: nothing to draw
//!      │
//!      ├─► needs_render(extent)?        zoom changed past the hysteresis
//!      │         │
//!      │         └─► render(projector, extent)  one grid lookup per pixel
//!      │
//!      └─► surface.draw_bitmap(cached bitmap, extent)
//! ```

use crate::bitmap::{Bitmap, RenderSurface};
use crate::colour::{Color, ColourScale};
use crate::config::RasterConfig;
use crate::error::Result;
use crate::radial::RadialSource;
use grid_common::{CoordinateProjector, Grid, Rect};
use std::sync::Arc;
use tracing::{debug, trace};

/// The data behind a raster layer.
#[derive(Debug, Clone)]
pub enum GridSource {
    /// A lon/lat grid: columns are longitude, rows latitude.
    Rectangular(Grid),
    /// Radial grids around a centre point.
    Radial(RadialSource),
}

impl GridSource {
    /// Value at a geographic point.
    pub fn pixel_value<P>(&self, projector: &P, lon: f64, lat: f64) -> Option<f64>
    where
        P: CoordinateProjector + ?Sized,
    {
        match self {
            GridSource::Rectangular(grid) => grid.closest_value(lon, lat),
            GridSource::Radial(radial) => radial.pixel_value(projector, lon, lat),
        }
    }

    /// Extent of the data in device units.
    pub fn extent<P>(&self, projector: &P) -> Option<Rect>
    where
        P: CoordinateProjector + ?Sized,
    {
        match self {
            GridSource::Rectangular(grid) => grid.envelope(projector),
            GridSource::Radial(radial) => radial.extent(projector),
        }
    }
}

/// Last rendered bitmap and the device extent it covers.
#[derive(Debug, Clone)]
struct RenderCache {
    bitmap: Bitmap,
    extent: Rect,
}

/// Renders a [`GridSource`] into a bitmap sized for the current view.
#[derive(Debug, Clone)]
pub struct GridRasterLayer {
    source: GridSource,
    config: RasterConfig,
    colours: Option<Arc<ColourScale>>,
    cache: Option<RenderCache>,
}

impl GridRasterLayer {
    pub fn new(source: GridSource, config: RasterConfig) -> Self {
        Self {
            source,
            config,
            colours: None,
            cache: None,
        }
    }

    /// Attach the colour scale used by [`value_to_colour`](Self::value_to_colour).
    pub fn with_colour_scale(mut self, colours: Arc<ColourScale>) -> Self {
        self.colours = Some(colours);
        self
    }

    pub fn set_colour_scale(&mut self, colours: Option<Arc<ColourScale>>) {
        self.colours = colours;
        self.reset();
    }

    pub fn source(&self) -> &GridSource {
        &self.source
    }

    pub fn set_source(&mut self, source: GridSource) {
        self.source = source;
        self.reset();
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Drop the cached bitmap so the next draw re-renders.
    pub fn reset(&mut self) {
        self.cache = None;
    }

    /// The bitmap from the last render, if any.
    pub fn cached_bitmap(&self) -> Option<&Bitmap> {
        self.cache.as_ref().map(|c| &c.bitmap)
    }

    /// Colour for a cell value; opaque white when no colour is configured.
    pub fn value_to_colour(&self, value: f64) -> Color {
        self.colours
            .as_ref()
            .and_then(|scale| scale.colour(&self.config.property, value))
            .unwrap_or_else(Color::white)
    }

    pub fn pixel_value<P>(&self, projector: &P, lon: f64, lat: f64) -> Option<f64>
    where
        P: CoordinateProjector + ?Sized,
    {
        self.source.pixel_value(projector, lon, lat)
    }

    pub fn extent<P>(&self, projector: &P) -> Option<Rect>
    where
        P: CoordinateProjector + ?Sized,
    {
        self.source.extent(projector)
    }

    /// Whether a draw covering `extent` must re-render.
    ///
    /// True with no cached bitmap, or when the device width of the grid
    /// extent has grown or shrunk by more than `zoom_hysteresis` since the
    /// last render.
    pub fn needs_render(&self, extent: &Rect) -> bool {
        let Some(cache) = &self.cache else {
            return true;
        };
        let width = extent.width();
        let previous = cache.extent.width();
        let factor = self.config.zoom_hysteresis;

        width > previous * factor || width < previous / factor
    }

    /// Rasterise the source over `device`, a rectangle in device units.
    ///
    /// The bitmap is at most `max_width` x `max_height` pixels. Bitmap row 0
    /// holds the samples at the `max_y` edge of `device`. Pixels with no
    /// value stay transparent.
    pub fn render<P>(&self, projector: &P, device: &Rect) -> Bitmap
    where
        P: CoordinateProjector + ?Sized,
    {
        let full_width = device.width().abs().floor() + 1.0;
        let full_height = device.height().abs().floor() + 1.0;
        let width = (full_width as usize).clamp(1, self.config.max_width.max(1));
        let height = (full_height as usize).clamp(1, self.config.max_height.max(1));

        let step_x = full_width / width as f64;
        let step_y = full_height / height as f64;
        let left = device.min_x.min(device.max_x);
        let bottom = device.min_y.min(device.max_y);

        let mut bitmap = Bitmap::new(width, height);
        for x in 0..width {
            let dux = left + x as f64 * step_x;
            for y in 0..height {
                let duy = bottom + y as f64 * step_y;
                let (lon, lat) = projector.device_to_geo(dux, duy);

                if let Some(value) = self.pixel_value(projector, lon, lat) {
                    if self.is_painted(value) {
                        bitmap.set_pixel(x, height - y - 1, self.value_to_colour(value));
                    }
                }
            }
        }

        debug!(
            width,
            height,
            painted = bitmap.painted_pixels(),
            "Rendered grid bitmap"
        );
        bitmap
    }

    fn is_painted(&self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        !(self.config.skip_negative && value < 0.0)
    }

    /// Draw the layer for `view` onto `surface`.
    ///
    /// Returns `Ok(false)` when there is nothing to draw: no extent, or an
    /// extent outside the view.
    pub fn draw<P, S>(&mut self, projector: &P, view: &Rect, surface: &mut S) -> Result<bool>
    where
        P: CoordinateProjector + ?Sized,
        S: RenderSurface + ?Sized,
    {
        let Some(extent) = self.extent(projector) else {
            trace!("Layer has no extent");
            return Ok(false);
        };
        if !projector.rect_intersects(view, &extent) {
            trace!(?extent, ?view, "Layer outside view");
            return Ok(false);
        }

        if self.needs_render(&extent) {
            let bitmap = self.render(projector, &extent);
            self.cache = Some(RenderCache { bitmap, extent });
        } else {
            trace!("Reusing cached bitmap");
        }

        match &self.cache {
            Some(cache) => {
                surface.draw_bitmap(&cache.bitmap, extent)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
