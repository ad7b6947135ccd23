//! Anchored rectangle description
//!
//! The canvas model positions a rectangle through fractional anchors into
//! its parent plus pixel offsets, so one description adapts to any parent
//! size. This module only holds the description; deriving pixel geometry
//! from it is the host layout system's job.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Normalized midpoint used by the defaulted constructor forms
fn center() -> Vec2 {
    Vec2::new(0.5, 0.5)
}

/// Describes a rectangle's size, shape, and position relative to its parent
///
/// A passive value object: construction assigns fields and nothing more.
/// No range is enforced - anchors and pivot normally sit in `[0, 1]` per
/// axis with `anchor_min` at or below `anchor_max`, but keeping them there
/// is the caller's job. Values outside `[0, 1]` anchor the rectangle
/// beyond the parent's bounds, which is valid for off-screen placement.
/// Fields stay writable after construction; intended usage is
/// write-once-then-read.
///
/// The host layout system derives pixel geometry per axis as:
///
/// - width  = `(anchor_max - anchor_min) * parent_size + size_delta`
/// - center = `parent_size * midpoint(anchor_min, anchor_max) + anchored_position`
///
/// With anchors stretched across the full parent (`(0, 0)..(1, 1)`) on a
/// 1920-wide parent, `size_delta.x = -1820.0` yields a 100 pixel wide box
/// and `size_delta.x = 0.0` a full-width one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoredRect {
    /// Size offset added to the anchor-derived base size
    pub size_delta: Vec2,

    /// Pixel offset applied to the anchor-derived base position
    pub anchored_position: Vec2,

    /// Fractional anchor for one corner within the parent's bounds
    ///
    /// `(0, 0)` is one corner of the parent and `(1, 1)` the opposite
    /// one; values in between interpolate.
    #[serde(default = "center")]
    pub anchor_min: Vec2,

    /// Fractional anchor for the opposite corner within the parent's bounds
    #[serde(default = "center")]
    pub anchor_max: Vec2,

    /// Normalized point of the rectangle aligned to the anchor position
    ///
    /// Moving the pivot shifts which point of the rectangle sits at the
    /// computed anchor position, offsetting the visual placement without
    /// changing [`anchored_position`](Self::anchored_position). The pivot
    /// is also the rectangle's rotation origin.
    #[serde(default = "center")]
    pub pivot: Vec2,
}

impl AnchoredRect {
    /// Create a rectangle with every field explicit
    pub fn new(
        size_delta: Vec2,
        anchored_position: Vec2,
        anchor_min: Vec2,
        anchor_max: Vec2,
        pivot: Vec2,
    ) -> Self {
        Self {
            size_delta,
            anchored_position,
            anchor_min,
            anchor_max,
            pivot,
        }
    }

    /// Create a rectangle with a centered pivot
    pub fn anchored(
        size_delta: Vec2,
        anchored_position: Vec2,
        anchor_min: Vec2,
        anchor_max: Vec2,
    ) -> Self {
        Self::new(size_delta, anchored_position, anchor_min, anchor_max, center())
    }

    /// Create a rectangle anchored to the center of its parent
    ///
    /// Anchors and pivot all sit at `(0.5, 0.5)`; `size_delta` is then the
    /// rectangle's full size and `anchored_position` its offset from the
    /// parent's center.
    pub fn centered(size_delta: Vec2, anchored_position: Vec2) -> Self {
        Self::new(size_delta, anchored_position, center(), center(), center())
    }

    /// Create a rectangle stretched across the parent's width
    ///
    /// Both anchors sit at height `y`: `0.0` is one edge, `0.5` the
    /// middle, `1.0` the opposite edge.
    pub fn stretch_horizontal(size_delta: Vec2, anchored_position: Vec2, y: f32) -> Self {
        Self::anchored(
            size_delta,
            anchored_position,
            Vec2::new(0.0, y),
            Vec2::new(1.0, y),
        )
    }

    /// Create a rectangle stretched across the parent's height
    ///
    /// Both anchors sit at width `x`: `0.0` is one edge, `0.5` the middle,
    /// `1.0` the opposite edge.
    pub fn stretch_vertical(size_delta: Vec2, anchored_position: Vec2, x: f32) -> Self {
        Self::anchored(
            size_delta,
            anchored_position,
            Vec2::new(x, 0.0),
            Vec2::new(x, 1.0),
        )
    }

    /// Create a rectangle stretched to fill its parent
    pub fn fill(size_delta: Vec2, anchored_position: Vec2) -> Self {
        Self::anchored(
            size_delta,
            anchored_position,
            Vec2::zeros(),
            Vec2::new(1.0, 1.0),
        )
    }
}

impl Default for AnchoredRect {
    fn default() -> Self {
        Self::centered(Vec2::zeros(), Vec2::zeros())
    }
}
