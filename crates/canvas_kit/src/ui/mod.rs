//! Canvas-space layout data for the UI layer
//!
//! Describes rectangles relative to a parent (anchors, pivot, offsets)
//! without computing any geometry; the host layout system turns these
//! descriptions into pixels.

pub mod rect;
pub mod sheet;

pub use rect::AnchoredRect;
pub use sheet::{RectSheet, SheetError};
