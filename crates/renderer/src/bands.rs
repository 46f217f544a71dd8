//! Contour-band rendering from row ranges.

use crate::bitmap::Bitmap;
use crate::colour::ColourScale;
use grid_common::Grid;
use tracing::debug;

/// Paint each threshold band of `grid` in the colour of its trip value.
///
/// One pixel per cell. The row with the largest row coordinate is drawn at
/// the top. `trips` is sorted in place.
pub fn render_contour_bands(
    grid: &Grid,
    trips: &mut [f64],
    scale: &ColourScale,
    property: &str,
) -> Bitmap {
    let width = grid.num_columns();
    let height = grid.num_rows();
    let mut bitmap = Bitmap::new(width, height);

    let descending = match grid.rows() {
        [first, .., last] => first >= last,
        _ => true,
    };

    let mut bands = 0;
    for row in 0..height {
        let pixel_row = if descending { row } else { height - row - 1 };

        for range in grid.row_ranges(row, trips) {
            let Some(colour) = scale.colour(property, range.trip) else {
                continue;
            };
            bitmap.fill_rect(range.start, pixel_row, range.end + 1, pixel_row + 1, colour);
            bands += 1;
        }
    }

    debug!(width, height, bands, "Rendered contour bands");
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Color;

    #[test]
    fn test_bands_painted_with_trip_colour() {
        let mut grid = Grid::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0, 3.0]);
        for (x, v) in [1.0, 4.0, 6.0, 9.0].iter().enumerate() {
            grid.set(x, 0, *v);
        }
        grid.set(0, 1, 7.0);

        let mut scale = ColourScale::new();
        scale
            .load_csv_str("t", "0,0,0,255\n5,0,255,0\n")
            .unwrap();

        let mut trips = vec![5.0, 0.0];
        let bitmap = render_contour_bands(&grid, &mut trips, &scale, "t");

        // Rows ascend, so grid row 0 is the bottom pixel row.
        assert_eq!(bitmap.pixel(0, 1), Some(Color::opaque(0, 0, 255)));
        assert_eq!(bitmap.pixel(1, 1), Some(Color::opaque(0, 0, 255)));
        assert_eq!(bitmap.pixel(2, 1), Some(Color::opaque(0, 255, 0)));
        assert_eq!(bitmap.pixel(3, 1), Some(Color::opaque(0, 255, 0)));
        assert_eq!(bitmap.pixel(0, 0), Some(Color::opaque(0, 255, 0)));
        assert_eq!(bitmap.pixel(1, 0), Some(Color::transparent()));
        assert_eq!(trips, vec![0.0, 5.0]);
    }
}
