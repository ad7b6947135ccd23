//! Font lookup services for the UI layer
//!
//! The host engine owns every font resource; this module records
//! name-to-handle associations and memoizes lookups so repeated queries
//! avoid re-enumerating the engine's resource table.

pub mod cache;
pub mod registry;

pub use cache::{FontCache, PREFERRED_BOLD, PREFERRED_REGULAR};
pub use registry::{FontEntry, FontFace, FontHandle, FontRegistry, StaticFontRegistry};
