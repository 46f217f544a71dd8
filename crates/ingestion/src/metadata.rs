//! File type detection for grid and styling inputs.

use std::path::Path;

/// Detected file type based on extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// ESRI ASCII grid (`.asc`, `.grd`)
    AsciiGrid,
    /// Colour scale table (`.csv`)
    ColourCsv,
    /// JSON style definition (`.json`)
    StyleJson,
    /// Unknown format
    Unknown,
}

/// Detect file type from path.
pub fn detect_file_type(path: impl AsRef<Path>) -> FileType {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("asc") | Some("grd") => FileType::AsciiGrid,
        Some("csv") => FileType::ColourCsv,
        Some("json") => FileType::StyleJson,
        _ => FileType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_file_type() {
        assert_eq!(detect_file_type("data/depth.asc"), FileType::AsciiGrid);
        assert_eq!(detect_file_type("DEPTH.GRD"), FileType::AsciiGrid);
        assert_eq!(detect_file_type("scales/colours.csv"), FileType::ColourCsv);
        assert_eq!(detect_file_type("styles/temperature.json"), FileType::StyleJson);
        assert_eq!(detect_file_type("README"), FileType::Unknown);
    }
}
