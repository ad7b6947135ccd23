//! Named rectangle collections loaded from RON
//!
//! Menu and HUD layouts live in data files; a sheet maps element names to
//! [`AnchoredRect`] values. Parsing is the only work done here - resolving
//! rectangles to pixels stays with the host layout system.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::rect::AnchoredRect;

/// Errors that can occur while loading a rect sheet
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failed to read the sheet file
    #[error("Failed to read rect sheet {path:?}: {source}")]
    Io {
        /// Path of the sheet that could not be read
        path: PathBuf,

        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Sheet contents were not valid RON
    #[error("Failed to parse rect sheet: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Named set of anchored rectangles for one screen or panel
#[derive(Debug, Clone, Default)]
pub struct RectSheet {
    rects: HashMap<String, AnchoredRect>,
}

impl RectSheet {
    /// Parse a sheet from a RON string
    ///
    /// The document is a map from element name to rectangle; anchor and
    /// pivot fields may be omitted and default to `(0.5, 0.5)`.
    pub fn from_ron_str(text: &str) -> Result<Self, SheetError> {
        let rects = ron::from_str(text)?;
        Ok(Self { rects })
    }

    /// Load a sheet from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet = Self::from_ron_str(&text)?;
        log::debug!("Loaded rect sheet {:?} with {} entries", path, sheet.len());
        Ok(sheet)
    }

    /// Get a rectangle by element name
    pub fn get(&self, name: &str) -> Option<&AnchoredRect> {
        self.rects.get(name)
    }

    /// Iterate the element names in the sheet
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rects.keys().map(String::as_str)
    }

    /// Number of rectangles in the sheet
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check whether the sheet is empty
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::foundation::math::Vec2;

    const SHEET: &str = r#"{
        "backdrop": (
            size_delta: (0.0, 0.0),
            anchored_position: (0.0, 0.0),
            anchor_min: (0.0, 0.0),
            anchor_max: (1.0, 1.0),
        ),
        "title": (
            size_delta: (-1820.0, 120.0),
            anchored_position: (0.0, 380.0),
        ),
    }"#;

    #[test]
    fn test_parse_applies_centered_defaults() {
        let sheet = RectSheet::from_ron_str(SHEET).unwrap();
        assert_eq!(sheet.len(), 2);

        let title = sheet.get("title").unwrap();
        assert_eq!(title.size_delta, Vec2::new(-1820.0, 120.0));
        assert_eq!(title.anchor_min, Vec2::new(0.5, 0.5));
        assert_eq!(title.anchor_max, Vec2::new(0.5, 0.5));
        assert_eq!(title.pivot, Vec2::new(0.5, 0.5));

        let backdrop = sheet.get("backdrop").unwrap();
        assert_eq!(backdrop.anchor_min, Vec2::zeros());
        assert_eq!(backdrop.anchor_max, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_missing_element_is_none() {
        let sheet = RectSheet::from_ron_str(SHEET).unwrap();
        assert!(sheet.get("credits").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SHEET).unwrap();

        let sheet = RectSheet::load(file.path()).unwrap();
        assert_eq!(sheet.len(), 2);
        assert!(sheet.names().any(|name| name == "title"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = RectSheet::from_ron_str("not a sheet");
        assert!(matches!(result, Err(SheetError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        match RectSheet::load("no/such/sheet.ron") {
            Err(SheetError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("no/such/sheet.ron"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
