//! ESRI ASCII grid loader.
//!
//! File layout:
//!
//! ```text
//! ncols        3
//! nrows        2
//! xllcorner    0
//! yllcorner    0
//! cellsize     1
//! NODATA_value -9999
//! 1 2 3 4
//! 5 -9999 6 7
//! ```
//!
//! Header keys are case sensitive and `NODATA_value` ends the header. Each
//! payload line is one grid row in file order; the first token of a line is
//! ignored and the following tokens are the cell values.

use crate::error::{IngestError, Result};
use grid_common::{Grid, GridBounds};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// A source that can populate a [`Grid`] from a text stream.
///
/// `Ok(false)` means the input was structurally malformed; `Err` is reserved
/// for I/O failures and unparseable numbers.
pub trait GridDataset {
    /// Parse the header and allocate the grid.
    fn read_header<R: BufRead>(&mut self, reader: &mut R) -> Result<bool>;

    /// Parse the payload into the grid allocated by `read_header`.
    fn read_cells<R: BufRead>(&mut self, reader: &mut R) -> Result<bool>;

    /// The loaded grid, if a header has been read.
    fn grid(&self) -> Option<&Grid>;

    /// Read header then payload from one reader.
    fn read<R: BufRead>(&mut self, reader: &mut R) -> Result<bool> {
        let header_read = self.read_header(reader)?;
        let cells_read = self.read_cells(reader)?;
        Ok(header_read && cells_read)
    }

    /// Open `path` and read it.
    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading grid file");
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read(&mut reader)
    }
}

/// Parsed ASCII grid header.
#[derive(Debug, Clone, PartialEq)]
pub struct GridHeader {
    pub num_x: usize,
    pub num_y: usize,
    /// `xllcorner` / `xllcenter` value.
    pub x_origin: f64,
    /// `yllcorner` / `yllcenter` value.
    pub y_origin: f64,
    pub cell_size: f64,
    pub null_value: f64,
    /// Origin given as a cell centre (`xllcenter`).
    pub x_center: bool,
    /// Origin given as a cell centre (`yllcenter`).
    pub y_center: bool,
}

impl GridHeader {
    /// Outer cell edges of the grid.
    pub fn bounds(&self) -> GridBounds {
        let (min_x, max_x) = edges(self.x_origin, self.cell_size, self.num_x, self.x_center);
        let (min_y, max_y) = edges(self.y_origin, self.cell_size, self.num_y, self.y_center);
        GridBounds::new(min_x, max_x, min_y, max_y)
    }

    /// Column coordinates, west to east.
    pub fn columns(&self) -> Vec<f64> {
        axis(self.x_origin, self.cell_size, self.num_x, self.x_center)
    }

    /// Row coordinates in payload order (north to south).
    pub fn rows(&self) -> Vec<f64> {
        let mut rows = axis(self.y_origin, self.cell_size, self.num_y, self.y_center);
        rows.reverse();
        rows
    }
}

fn edges(origin: f64, cell_size: f64, count: usize, centre: bool) -> (f64, f64) {
    let min = if centre { origin - cell_size / 2.0 } else { origin };
    (min, min + cell_size * count as f64)
}

fn axis(origin: f64, cell_size: f64, count: usize, centre: bool) -> Vec<f64> {
    if centre {
        // Centre-registered axes are not generated.
        warn!(origin, count, "Centre-registered axis left empty");
        return Vec::new();
    }
    (0..count).map(|i| origin + i as f64 * cell_size).collect()
}

/// Header fields collected before `NODATA_value` is seen.
#[derive(Debug, Default)]
struct RawHeader {
    num_x: Option<usize>,
    num_y: Option<usize>,
    x_origin: Option<(f64, bool)>,
    y_origin: Option<(f64, bool)>,
    cell_size: Option<f64>,
}

/// Loads an ESRI ASCII grid.
#[derive(Debug)]
pub struct AsciiGridDataset {
    delimiter: char,
    header: Option<GridHeader>,
    grid: Option<Grid>,
    line_number: usize,
}

impl Default for AsciiGridDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiGridDataset {
    /// Space-delimited dataset.
    pub fn new() -> Self {
        Self::with_delimiter(' ')
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter,
            header: None,
            grid: None,
            line_number: 0,
        }
    }

    /// Read a complete grid from `reader`, treating malformed input as an error.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut dataset = Self::new();
        if !dataset.read(&mut reader)? {
            return Err(IngestError::Malformed(format!(
                "grid stopped parsing at line {}",
                dataset.line_number
            )));
        }
        Ok(dataset)
    }

    /// Load a complete grid file, treating malformed input as an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut dataset = Self::new();
        if !dataset.load(path)? {
            return Err(IngestError::Malformed(path.display().to_string()));
        }
        Ok(dataset)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn header(&self) -> Option<&GridHeader> {
        self.header.as_ref()
    }

    pub fn into_grid(self) -> Option<Grid> {
        self.grid
    }

    fn parse<T: std::str::FromStr>(&self, token: &str) -> Result<T> {
        token
            .parse()
            .map_err(|_| IngestError::invalid_number(token, self.line_number))
    }
}

impl GridDataset for AsciiGridDataset {
    fn read_header<R: BufRead>(&mut self, reader: &mut R) -> Result<bool> {
        let mut raw = RawHeader::default();
        let mut null_value = None;
        let mut line = String::new();

        while null_value.is_none() {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            self.line_number += 1;

            let tokens: Vec<&str> = line
                .split(self.delimiter)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            let [key, value] = tokens[..] else {
                continue;
            };

            match key {
                "ncols" => raw.num_x = Some(self.parse(value)?),
                "nrows" => raw.num_y = Some(self.parse(value)?),
                "xllcorner" => raw.x_origin = Some((self.parse(value)?, false)),
                "xllcenter" => raw.x_origin = Some((self.parse(value)?, true)),
                "yllcorner" => raw.y_origin = Some((self.parse(value)?, false)),
                "yllcenter" => raw.y_origin = Some((self.parse(value)?, true)),
                "cellsize" => raw.cell_size = Some(self.parse(value)?),
                "NODATA_value" => null_value = Some(self.parse(value)?),
                other => debug!(key = other, line = self.line_number, "Ignoring header key"),
            }
        }

        let Some(null_value) = null_value else {
            warn!(line = self.line_number, "Header ended without NODATA_value");
            return Ok(false);
        };

        let (Some(num_x), Some(num_y), Some(cell_size)) = (raw.num_x, raw.num_y, raw.cell_size)
        else {
            warn!("Header is missing ncols, nrows or cellsize");
            return Ok(false);
        };
        if !(cell_size.is_finite() && cell_size > 0.0) {
            warn!(cellsize = cell_size, "Header cellsize must be positive");
            return Ok(false);
        }

        let (x_origin, x_center) = raw.x_origin.unwrap_or((0.0, false));
        let (y_origin, y_center) = raw.y_origin.unwrap_or((0.0, false));
        let header = GridHeader {
            num_x,
            num_y,
            x_origin,
            y_origin,
            cell_size,
            null_value,
            x_center,
            y_center,
        };

        debug!(
            ncols = num_x,
            nrows = num_y,
            cellsize = cell_size,
            nodata = null_value,
            "Parsed grid header"
        );

        self.grid = Some(Grid::with_bounds(
            header.rows(),
            header.columns(),
            header.bounds(),
        ));
        self.header = Some(header);
        Ok(true)
    }

    fn read_cells<R: BufRead>(&mut self, reader: &mut R) -> Result<bool> {
        let Some(null_value) = self.header.as_ref().map(|h| h.null_value) else {
            warn!("Payload read before header");
            return Ok(false);
        };
        let Some(mut grid) = self.grid.take() else {
            return Ok(false);
        };

        let columns = grid.num_columns();
        let rows = grid.num_rows();
        let mut y = 0;
        let mut read_some = false;
        let mut well_formed = true;
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            self.line_number += 1;

            let text = line.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }
            if y >= rows {
                warn!(line = self.line_number, rows, "Payload has more rows than nrows");
                well_formed = false;
                break;
            }

            let mut tokens: Vec<&str> = text.split(self.delimiter).collect();
            if tokens.len() == columns + 2 && tokens.last() == Some(&"") {
                tokens.pop();
            }
            if tokens.len() != columns + 1 {
                warn!(
                    line = self.line_number,
                    tokens = tokens.len(),
                    columns,
                    "Payload row value count does not match ncols"
                );
                well_formed = false;
            }

            for (x, token) in tokens.iter().enumerate().skip(1).take(columns) {
                read_some = true;
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                let value: f64 = match self.parse(token) {
                    Ok(value) => value,
                    Err(e) => {
                        self.grid = Some(grid);
                        return Err(e);
                    }
                };
                if value != null_value {
                    grid.set(x - 1, y, value);
                }
            }
            y += 1;
        }

        if y < rows {
            warn!(read = y, rows, "Payload has fewer rows than nrows");
            well_formed = false;
        }
        info!(
            rows = y,
            columns,
            min_z = grid.min_z(),
            max_z = grid.max_z(),
            "Read grid payload"
        );

        self.grid = Some(grid);
        Ok(read_some && well_formed)
    }

    fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}
