//! Vertical cross-section rendering of a depth grid.

use crate::bitmap::Bitmap;
use crate::colour::ColourScale;
use grid_common::Grid;

/// Render a depth grid as coloured cells, shallowest row at the top.
///
/// Every column is `width / columns` pixels wide. With `uniform_rows` each
/// row gets an equal share of `height`; otherwise a row's height is its
/// depth increment over the previous row, scaled so that the last depth
/// reaches the bottom. Cells without a value, NaN cells and values with no
/// colour are left transparent.
pub fn render_cross_section(
    grid: &Grid,
    scale: &ColourScale,
    property: &str,
    width: usize,
    height: usize,
    uniform_rows: bool,
) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height);
    if grid.num_columns() == 0 || grid.num_rows() == 0 {
        return bitmap;
    }

    let cell_width = width as f64 / grid.num_columns() as f64;
    let mut cell_top: f64 = 0.0;

    for y in 0..grid.num_rows() {
        let cell_height = row_height(grid, y, height as f64, uniform_rows);

        for x in 0..grid.num_columns() {
            let Some(z) = grid.get(x, y) else {
                continue;
            };
            if z.is_nan() {
                continue;
            }
            let Some(colour) = scale.colour(property, z) else {
                continue;
            };

            let left = x as f64 * cell_width;
            bitmap.fill_rect(
                left.floor() as usize,
                cell_top.floor() as usize,
                (left + cell_width).ceil() as usize,
                (cell_top + cell_height).ceil() as usize,
                colour,
            );
        }

        cell_top += cell_height;
    }

    bitmap
}

fn row_height(grid: &Grid, y: usize, height: f64, uniform_rows: bool) -> f64 {
    let rows = grid.rows();
    let uniform = height / rows.len() as f64;
    if uniform_rows {
        return uniform;
    }

    let depth_extent = rows[rows.len() - 1];
    if !(depth_extent > 0.0) {
        return uniform;
    }
    let increment = if y > 0 { rows[y] - rows[y - 1] } else { rows[y] };
    height / depth_extent * increment
}
