//! Tests for loading ESRI ASCII grids.

use grid_common::{GridBounds, Sample};
use ingestion::{AsciiGridDataset, GridDataset, IngestError};
use test_utils::{
    assert_sample_eq, write_temp_file, DEPTH_ASCII_GRID, SMALL_ASCII_GRID, TRUNCATED_ASCII_GRID,
};

fn read(text: &str) -> (AsciiGridDataset, bool) {
    let mut dataset = AsciiGridDataset::new();
    let ok = dataset.read(&mut text.as_bytes()).unwrap();
    (dataset, ok)
}

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn test_small_grid_axes_and_cells() {
    let (dataset, ok) = read(SMALL_ASCII_GRID);
    assert!(ok);

    let grid = dataset.grid().unwrap();
    assert_eq!(grid.columns(), &[0.0, 1.0, 2.0]);
    assert_eq!(grid.rows(), &[1.0, 0.0]);

    // The first token of each payload line is skipped.
    assert_eq!(grid.get(0, 0), Some(2.0));
    assert_eq!(grid.get(1, 0), Some(3.0));
    assert_eq!(grid.get(2, 0), Some(4.0));
    assert_eq!(grid.get(0, 1), None);
    assert_eq!(grid.get(1, 1), Some(6.0));
    assert_eq!(grid.get(2, 1), Some(7.0));

    assert_eq!(grid.min_z(), 2.0);
    assert_eq!(grid.max_z(), 7.0);
}

#[test]
fn test_small_grid_queries_by_coordinate() {
    let (dataset, _) = read(SMALL_ASCII_GRID);
    let grid = dataset.grid().unwrap();

    // Second payload line is the southern row at y = 0.
    assert_eq!(grid.sample(0.0, 0.0), Sample::NoData);
    assert_eq!(grid.closest_value(1.4, 0.2), Some(6.0));
    assert_eq!(grid.closest_value(2.0, 1.0), Some(4.0));
    assert_eq!(grid.sample(-0.5, 0.5), Sample::OutOfBounds);
}

#[test]
fn test_header_values() {
    let (dataset, _) = read(DEPTH_ASCII_GRID);
    let header = dataset.header().unwrap();

    assert_eq!(header.num_x, 4);
    assert_eq!(header.num_y, 3);
    assert_eq!(header.cell_size, 0.5);
    assert_eq!(header.null_value, -1.0);
    assert!(!header.x_center);
    assert!(!header.y_center);
    assert_eq!(header.bounds(), GridBounds::new(10.0, 12.0, 50.0, 51.5));
}

#[test]
fn test_depth_grid_null_cell() {
    let (dataset, ok) = read(DEPTH_ASCII_GRID);
    assert!(ok);
    let grid = dataset.into_grid().unwrap();

    assert_eq!(grid.columns(), &[10.0, 10.5, 11.0, 11.5]);
    assert_eq!(grid.rows(), &[51.0, 50.5, 50.0]);
    assert_eq!(grid.get(2, 1), None);
    assert_eq!(grid.closest_value(11.0, 50.5), None);
    assert_sample_eq!(grid.closest_value(11.5, 50.0), 36.0);
    assert_sample_eq!(grid.closest_value(10.1, 51.1), 10.0);
    assert_sample_eq!(grid.closest_value(10.6, 50.4), 22.0);
}

#[test]
fn test_custom_delimiter_and_empty_tokens() {
    let text = "ncols,3\nnrows,1\nxllcorner,0\nyllcorner,0\ncellsize,1\nNODATA_value,-1\n0,,5,-1\n";
    let mut dataset = AsciiGridDataset::with_delimiter(',');
    assert!(dataset.read(&mut text.as_bytes()).unwrap());

    let grid = dataset.grid().unwrap();
    assert_eq!(grid.get(0, 0), None);
    assert_eq!(grid.get(1, 0), Some(5.0));
    assert_eq!(grid.get(2, 0), None);
}

#[test]
fn test_trailing_delimiter_and_crlf() {
    let text = "ncols 2\r\nnrows 1\r\nxllcorner 0\r\nyllcorner 0\r\ncellsize 1\r\nNODATA_value -1\r\n0 1 2 \r\n";
    let (dataset, ok) = read(text);
    assert!(ok);
    assert_eq!(dataset.grid().unwrap().get(1, 0), Some(2.0));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_missing_nodata_is_malformed() {
    let (dataset, ok) = read(TRUNCATED_ASCII_GRID);
    assert!(!ok);
    assert!(dataset.grid().is_none());
}

#[test]
fn test_extra_columns_are_malformed() {
    let text = "ncols 2\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n0 1 2 3\n";
    let (dataset, ok) = read(text);
    assert!(!ok);
    // Values that fit are still stored.
    assert_eq!(dataset.grid().unwrap().get(1, 0), Some(2.0));
}

#[test]
fn test_extra_rows_are_malformed() {
    let text = "ncols 1\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n0 1\n0 2\n";
    let (dataset, ok) = read(text);
    assert!(!ok);
    assert_eq!(dataset.grid().unwrap().get(0, 0), Some(1.0));
}

#[test]
fn test_bad_payload_number_is_error() {
    let text = "ncols 2\nnrows 1\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n0 1 deep\n";
    let mut dataset = AsciiGridDataset::new();
    let err = dataset.read(&mut text.as_bytes()).unwrap_err();
    match err {
        IngestError::InvalidNumber { token, line } => {
            assert_eq!(token, "deep");
            assert_eq!(line, 7);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_short_row_is_malformed() {
    let text = "ncols 3\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n1 2\n5 6 7 8\n";
    let (dataset, ok) = read(text);
    assert!(!ok);

    let grid = dataset.grid().unwrap();
    assert_eq!(grid.get(0, 0), Some(2.0));
    assert_eq!(grid.get(1, 0), None);
    assert_eq!(grid.get(2, 1), Some(8.0));
}

#[test]
fn test_missing_rows_are_malformed() {
    let text = "ncols 2\nnrows 3\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -1\n0 1 2\n0 3 4\n";
    let (dataset, ok) = read(text);
    assert!(!ok);
    assert_eq!(dataset.grid().unwrap().get(1, 1), Some(4.0));
}

#[test]
fn test_non_positive_cellsize_is_malformed() {
    for cellsize in ["0", "-0.5", "NaN"] {
        let text = format!("ncols 1\nnrows 1\ncellsize {}\nNODATA_value -1\n", cellsize);
        let mut dataset = AsciiGridDataset::new();
        assert!(!dataset.read_header(&mut text.as_bytes()).unwrap(), "cellsize {}", cellsize);
        assert!(dataset.grid().is_none());
    }
}

#[test]
fn test_from_reader_rejects_malformed() {
    let result = AsciiGridDataset::from_reader(TRUNCATED_ASCII_GRID.as_bytes());
    assert!(matches!(result, Err(IngestError::Malformed(_))));

    let dataset = AsciiGridDataset::from_reader(SMALL_ASCII_GRID.as_bytes()).unwrap();
    assert_eq!(dataset.grid().unwrap().num_columns(), 3);
}

// ============================================================================
// File-backed loads
// ============================================================================

#[test]
fn test_load_from_file() {
    let file = write_temp_file(DEPTH_ASCII_GRID, ".asc");
    let mut dataset = AsciiGridDataset::new();
    assert!(dataset.load(file.path()).unwrap());
    assert_eq!(dataset.grid().unwrap().max_z(), 36.0);
}

#[test]
fn test_open_truncated_file() {
    let file = write_temp_file(TRUNCATED_ASCII_GRID, ".asc");
    assert!(matches!(
        AsciiGridDataset::open(file.path()),
        Err(IngestError::Malformed(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut dataset = AsciiGridDataset::new();
    let result = dataset.load(dir.path().join("absent.asc"));
    assert!(matches!(result, Err(IngestError::Io(_))));
}
