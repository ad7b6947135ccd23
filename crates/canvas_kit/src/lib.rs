//! # Canvas Kit
//!
//! Canvas-space UI utilities for game engines.
//!
//! ## Features
//!
//! - **Anchored Rectangles**: Describe a rectangle's size and position
//!   relative to its parent through anchors, a pivot, and offsets
//! - **Font Cache**: Memoized name lookups over an engine-owned font
//!   registry, plus a pair of preferred faces resolved by a shared scan
//! - **Rect Sheets**: Named rectangle collections loaded from RON data
//!
//! The crate only describes layout inputs and records font associations;
//! resolving rectangles to pixels and managing font resource lifetimes
//! stay with the host engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use canvas_kit::prelude::*;
//!
//! let mut registry = StaticFontRegistry::new();
//! registry.insert("TrajanPro-Bold");
//! registry.insert("TrajanPro-Regular");
//!
//! let mut fonts = FontCache::new();
//! assert!(fonts.preferred_bold(&registry).is_some());
//!
//! // A 100 pixel wide, full-height box centered on a 1920-wide parent.
//! let box_rect = AnchoredRect::fill(Vec2::new(-1820.0, 0.0), Vec2::zeros());
//! assert_eq!(box_rect.anchor_max, Vec2::new(1.0, 1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod fonts;
pub mod ui;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        fonts::{FontCache, FontHandle, FontRegistry, StaticFontRegistry},
        foundation::math::Vec2,
        ui::{AnchoredRect, RectSheet, SheetError},
    };
}
