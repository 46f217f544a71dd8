//! Tests for cross-sections built from horizontal grids.

use grid_common::{Grid, GridBounds};
use grid_processor::{DepthGrid, DepthProfile, DepthStack, NUM_COLUMNS};
use test_utils::{assert_approx_eq, create_geo_grid, IdentityProjector};

const METRES_PER_DEGREE: f64 = projection::EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

// ============================================================================
// DepthGrid::from_grids
// ============================================================================

#[test]
fn test_columns_are_distances_along_line() {
    let source = create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), 1.0);
    let levels = vec![(10.0, Some(&source))];

    let depth = DepthGrid::from_grids(&levels, (0.0, 0.0), (2.0, 0.0), &IdentityProjector::default());
    let grid = depth.grid().unwrap();

    assert_eq!(grid.num_columns(), NUM_COLUMNS);
    assert_eq!(grid.columns()[0], 0.0);
    assert_approx_eq!(grid.columns()[49], 2.0 * METRES_PER_DEGREE, 1e-3);
    for pair in grid.columns().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_first_present_grid_sets_bounds() {
    let narrow = create_geo_grid(3, 3, (0.0, 0.0, 1.0, 1.0), 5.0);
    let wide = create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), -1.0);
    let levels = vec![(10.0, None), (20.0, Some(&narrow)), (30.0, Some(&wide))];

    let depth = DepthGrid::from_grids(&levels, (0.0, 0.0), (2.0, 0.0), &IdentityProjector::default());
    let grid = depth.grid().unwrap();

    assert_eq!(grid.rows(), &[10.0, 20.0, 30.0]);
    // The wider grid's bounds are ignored.
    assert_eq!(grid.bounds(), Some(&GridBounds::new(0.0, 1.0, 0.0, 1.0)));

    // Depth without a source grid stays empty.
    assert_eq!(grid.get(0, 0), None);
    assert_eq!(grid.get(49, 0), None);

    // Narrow grid: inside then outside its bounds.
    assert_eq!(grid.get(0, 1), Some(5.0));
    assert_eq!(grid.get(10, 1), Some(6.0));
    assert!(grid.get(49, 1).unwrap().is_nan());
}

#[test]
fn test_negative_samples_become_nan() {
    let wide = create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), -1.0);
    let levels = vec![(30.0, Some(&wide))];

    let depth = DepthGrid::from_grids(&levels, (0.0, 0.0), (2.0, 0.0), &IdentityProjector::default());
    let grid = depth.grid().unwrap();

    assert!(grid.get(0, 0).unwrap().is_nan());
    assert_eq!(grid.get(49, 0), Some(1.0));
    // NaN never moves the value range.
    assert_eq!(grid.min_z(), 0.0);
    assert_eq!(grid.max_z(), 1.0);
}

#[test]
fn test_without_any_source_grid() {
    let levels: Vec<(f64, Option<&Grid>)> = vec![(10.0, None), (20.0, None)];
    let depth = DepthGrid::from_grids(&levels, (0.0, 0.0), (1.0, 1.0), &IdentityProjector::default());
    assert!(depth.into_grid().is_none());
}

// ============================================================================
// DepthStack -> DepthGrid -> DepthProfile
// ============================================================================

#[test]
fn test_stack_cross_section_profile() {
    let mut stack = DepthStack::new();
    stack.insert(50.0, "temperature", create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), 12.0));
    stack.insert(0.0, "temperature", create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), 20.0));
    stack.insert(0.0, "salinity", create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), 35.0));

    let depth = stack.cross_section("temperature", (0.0, 1.0), (2.0, 1.0), &IdentityProjector::default());
    let grid = depth.grid().unwrap();
    assert_eq!(grid.rows(), &[0.0, 50.0]);

    let profile = DepthProfile::from_grid(grid, 49).unwrap();
    assert_eq!(profile.values(), &[(0.0, 22.0), (50.0, 14.0)]);
    assert_eq!(profile.max_depth(), Some(50.0));
    assert_eq!(profile.min_max(), Some((14.0, 22.0)));
}
