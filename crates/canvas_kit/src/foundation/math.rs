//! Math utilities and types
//!
//! Canvas-space layout is two-dimensional; the crate builds on nalgebra's
//! vector types.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;
