//! Common test fixtures for gridview tests.

/// The 3x2 grid with one null cell used throughout the loader tests.
pub const SMALL_ASCII_GRID: &str = "\
ncols 3
nrows 2
xllcorner 0
yllcorner 0
cellsize 1
NODATA_value -9999
1 2 3 4
5 -9999 6 7
";

/// A 4x3 depth grid positioned at 10E 50N with 0.5 degree cells.
pub const DEPTH_ASCII_GRID: &str = "\
ncols        4
nrows        3
xllcorner    10.0
yllcorner    50.0
cellsize     0.5
NODATA_value -1
0 10 12 14 16
1 20 22 -1 26
2 30 32 34 36
";

/// Header without the terminating `NODATA_value` line.
pub const TRUNCATED_ASCII_GRID: &str = "\
ncols 2
nrows 2
xllcorner 0
yllcorner 0
cellsize 1
";

/// Two-stop black to white colour scale.
pub const BLACK_WHITE_CSV: &str = "\
0,0,0,0
10,255,255,255
";

/// A depth colour scale in the CSV format.
pub const DEPTH_CSV: &str = "\
# colour scale for depth in metres
0,255,255,204
10,161,218,180
20,65,182,196
30,44,127,184
40,37,52,148
";

/// The same depth colours as a JSON style definition.
pub const DEPTH_STYLE_JSON: &str = r##"{
  "name": "Depth",
  "stops": [
    { "value": 0.0, "color": "#FFFFCC", "label": "0 m" },
    { "value": 10.0, "color": "#A1DAB4" },
    { "value": 20.0, "color": "#41B6C4" },
    { "value": 30.0, "color": "#2C7FB8" },
    { "value": 40.0, "color": "#253494", "label": "40 m" }
  ]
}"##;
