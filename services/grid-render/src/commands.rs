//! Command implementations.

use crate::config::{Command, OutputArgs, StyleArgs};
use crate::surface::PngSurface;
use anyhow::{anyhow, bail, Context, Result};
use grid_common::{Grid, Rect};
use grid_processor::{DepthProfile, DepthStack, DEFAULT_MARGIN_PERCENT};
use ingestion::{detect_file_type, AsciiGridDataset, FileType, GridDataset};
use projection::{destination_point, ViewportProjector};
use renderer::{
    render_contour_bands, render_cross_section, Bitmap, ColourScale, GridRasterLayer, GridSource,
    RadialConfig, RadialSource, RasterConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Map {
            grid,
            delimiter,
            include_negative,
            style,
            output,
        } => run_map(grid, *delimiter, *include_negative, style, output),
        Command::Radial {
            centre,
            radials,
            sample_row,
            style,
            output,
        } => run_radial(*centre, radials, *sample_row, style, output),
        Command::Section {
            layers,
            from,
            to,
            uniform_rows,
            profile,
            style,
            output,
        } => run_section(layers, *from, *to, *uniform_rows, *profile, style, output),
        Command::Bands {
            grid,
            trips,
            style,
            output,
        } => run_bands(grid, trips, style, output),
    }
}

fn run_map(
    path: &Path,
    delimiter: char,
    include_negative: bool,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<()> {
    let grid = load_grid(path, delimiter)?;
    let colours = load_colours(style)?;
    let projector = viewport(geo_extent(&grid)?, output)?;

    let layer = GridRasterLayer::new(
        GridSource::Rectangular(grid),
        raster_config(style, include_negative)?,
    );
    draw_layer(layer, colours, &projector, &output.output)
}

fn run_radial(
    (lon, lat): (f64, f64),
    radials: &[(f64, PathBuf)],
    sample_row: f64,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<()> {
    let mut grids = Vec::with_capacity(radials.len());
    for (bearing, path) in radials {
        grids.push((*bearing, load_grid(path, ' ')?));
    }

    let mut source = RadialSource::new(RadialConfig {
        centre_lat: lat,
        centre_lon: lon,
        sample_row,
    });
    source.set_radials(grids);

    let distance = source
        .max_distance()
        .context("Radial grids have no distance columns")?;
    let (north, _) = destination_point(lat, lon, 0.0, distance);
    let (_, east) = destination_point(lat, lon, 90.0, distance);
    let (south, _) = destination_point(lat, lon, 180.0, distance);
    let (_, west) = destination_point(lat, lon, 270.0, distance);
    let projector = viewport(Rect::new(west, south, east, north), output)?;

    let colours = load_colours(style)?;
    let layer = GridRasterLayer::new(GridSource::Radial(source), raster_config(style, false)?);
    draw_layer(layer, colours, &projector, &output.output)
}

fn run_section(
    layers: &[(f64, PathBuf)],
    from: (f64, f64),
    to: (f64, f64),
    uniform_rows: bool,
    profile: Option<usize>,
    style: &StyleArgs,
    output: &OutputArgs,
) -> Result<()> {
    let mut stack = DepthStack::new();
    for (depth, path) in layers {
        stack.insert(*depth, &style.property, load_grid(path, ' ')?);
    }

    let first = stack
        .layers()
        .first()
        .map(|layer| &layer.grid)
        .context("No layers given")?;
    let projector = viewport(geo_extent(first)?, output)?;

    let section = stack
        .cross_section(&style.property, from, to, &projector)
        .into_grid()
        .context("No layer produced a cross-section")?;
    info!(
        depths = section.num_rows(),
        columns = section.num_columns(),
        "Built cross-section"
    );

    if let Some(column) = profile {
        print_profile(&section, column)?;
    }

    let colours = load_colours(style)?;
    let bitmap = render_cross_section(
        &section,
        &colours,
        &style.property,
        output.width as usize,
        output.height as usize,
        uniform_rows,
    );
    write_png(&bitmap, &output.output)
}

fn run_bands(path: &Path, trips: &[f64], style: &StyleArgs, output: &Path) -> Result<()> {
    let grid = load_grid(path, ' ')?;
    let colours = load_colours(style)?;

    let mut trips = trips.to_vec();
    let bitmap = render_contour_bands(&grid, &mut trips, &colours, &style.property);
    write_png(&bitmap, output)
}

/// Load a complete ASCII grid.
fn load_grid(path: &Path, delimiter: char) -> Result<Grid> {
    let mut dataset = AsciiGridDataset::with_delimiter(delimiter);
    let complete = dataset
        .load(path)
        .with_context(|| format!("Failed to load grid {}", path.display()))?;
    if !complete {
        bail!("{} is not a complete ASCII grid", path.display());
    }
    dataset
        .into_grid()
        .with_context(|| format!("{} holds no grid", path.display()))
}

/// Load a colour scale, picking the format from the file extension.
fn load_colours(style: &StyleArgs) -> Result<ColourScale> {
    let path = &style.colours;
    let mut scale = ColourScale::new();

    let count = match detect_file_type(path) {
        FileType::ColourCsv => scale.load_csv(&style.property, path),
        FileType::StyleJson => scale.load_style_file(&style.property, path),
        other => bail!(
            "Unsupported colour scale {} ({:?}), expected .csv or .json",
            path.display(),
            other
        ),
    }
    .with_context(|| format!("Failed to load colour scale {}", path.display()))?;

    if count == 0 {
        warn!(path = %path.display(), "Colour scale has no control points");
    }
    Ok(scale)
}

fn raster_config(style: &StyleArgs, include_negative: bool) -> Result<RasterConfig> {
    let env = RasterConfig::from_env();
    let config = RasterConfig {
        property: style.property.clone(),
        skip_negative: env.skip_negative && !include_negative,
        ..env
    };
    config
        .validate()
        .map_err(|e| anyhow!("Invalid raster configuration: {}", e))?;
    Ok(config)
}

/// Geographic extent of a grid: its bounds, or the span of its axes.
fn geo_extent(grid: &Grid) -> Result<Rect> {
    if let Some(bounds) = grid.bounds().filter(|b| b.is_complete()) {
        return Ok(Rect::new(
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y,
        ));
    }

    let span = |axis: &[f64]| {
        axis.iter()
            .copied()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })
    };
    match (span(grid.columns()), span(grid.rows())) {
        (Some((min_x, max_x)), Some((min_y, max_y))) => Ok(Rect::new(min_x, min_y, max_x, max_y)),
        _ => bail!("Grid has an empty axis"),
    }
}

fn viewport(geo: Rect, output: &OutputArgs) -> Result<ViewportProjector> {
    ViewportProjector::new(geo, output.width as f64, output.height as f64)
        .context("Failed to build viewport")
}

fn draw_layer(
    layer: GridRasterLayer,
    colours: ColourScale,
    projector: &ViewportProjector,
    output: &Path,
) -> Result<()> {
    let mut layer = layer.with_colour_scale(Arc::new(colours));
    let mut surface = PngSurface::new(output);
    let view = projector.device_rect();

    if !layer.draw(projector, &view, &mut surface)? {
        bail!("Nothing to draw: the grid has fewer than 3 rows or columns, or lies outside the view");
    }
    Ok(())
}

fn write_png(bitmap: &Bitmap, path: &Path) -> Result<()> {
    let png = bitmap.to_png()?;
    std::fs::write(path, &png).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        path = %path.display(),
        width = bitmap.width(),
        height = bitmap.height(),
        "Wrote PNG"
    );
    Ok(())
}

fn print_profile(section: &Grid, column: usize) -> Result<()> {
    let profile = DepthProfile::from_grid(section, column)?;
    if let Some((min, max)) = profile.min_max_with_margin(DEFAULT_MARGIN_PERCENT) {
        println!("# column {} values {:.3} to {:.3}", column, min, max);
    }
    for (depth, value) in profile.values() {
        println!("{}\t{}", depth, value);
    }
    Ok(())
}
