//! Font registry surface
//!
//! Defines the enumeration contract the engine exposes to the UI layer,
//! the opaque handle used to refer to a font, and an in-memory registry
//! implementation for tools and tests.

use crate::foundation::collections::{HandleMap, TypedHandle};

/// Registry-side record of a loaded font resource
///
/// The face data itself (glyph tables, atlas textures) stays with the
/// engine; only the name is visible to the UI layer.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Resource name, e.g. `"TrajanPro-Bold"`
    pub name: String,
}

/// Opaque handle to an engine-owned font resource
///
/// Handles refer to resources they do not own; the registry that issued a
/// handle controls the resource's lifetime.
pub type FontHandle = TypedHandle<FontFace>;

/// One row of a registry enumeration
#[derive(Debug, Clone)]
pub struct FontEntry {
    /// Resource name
    pub name: String,

    /// Handle to the resource
    pub handle: FontHandle,
}

/// Enumeration contract for engine-owned font resources
///
/// Each call to [`fonts`](FontRegistry::fonts) is one full enumeration of
/// the currently loaded fonts, in registry order.
pub trait FontRegistry {
    /// Snapshot every loaded font, in registry order
    fn fonts(&self) -> Vec<FontEntry>;
}

/// In-memory font registry with deterministic enumeration order
///
/// Fonts enumerate in insertion order, also after removals. Stands in for
/// the engine's resource table in tools, demos, and tests.
pub struct StaticFontRegistry {
    faces: HandleMap<FontFace>,
    order: Vec<FontHandle>,
}

impl StaticFontRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            faces: HandleMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a font by name, returning its handle
    pub fn insert(&mut self, name: impl Into<String>) -> FontHandle {
        let key = self.faces.insert(FontFace { name: name.into() });
        let handle = FontHandle::new(key);
        self.order.push(handle);
        handle
    }

    /// Unregister a font, returning its record if it was present
    pub fn remove(&mut self, handle: FontHandle) -> Option<FontFace> {
        let face = self.faces.remove(handle.key())?;
        self.order.retain(|&h| h != handle);
        Some(face)
    }

    /// Look up the record behind a handle
    pub fn face(&self, handle: FontHandle) -> Option<&FontFace> {
        self.faces.get(handle.key())
    }

    /// Number of registered fonts
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for StaticFontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry for StaticFontRegistry {
    fn fonts(&self) -> Vec<FontEntry> {
        self.order
            .iter()
            .filter_map(|&handle| {
                self.faces.get(handle.key()).map(|face| FontEntry {
                    name: face.name.clone(),
                    handle,
                })
            })
            .collect()
    }
}
