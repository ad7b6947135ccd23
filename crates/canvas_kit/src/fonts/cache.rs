//! Font cache for memoized name lookups
//!
//! Caching layer over a [`FontRegistry`] so repeated lookups avoid
//! re-enumerating the engine's resource table.

use std::collections::HashMap;

use super::registry::{FontHandle, FontRegistry};

/// Name of the preferred bold face
pub const PREFERRED_BOLD: &str = "TrajanPro-Bold";

/// Name of the preferred regular face
pub const PREFERRED_REGULAR: &str = "TrajanPro-Regular";

/// Memoized font lookups over an engine-owned registry
///
/// The cache records which handle corresponds to which name; it never
/// loads, frees, or validates the underlying resources. Constructed by the
/// host application and passed by reference to consumers - there is no
/// global instance. All methods are synchronous and the type holds no
/// locks; callers on multiple threads must synchronize externally.
///
/// The two lookup paths differ, which is observable when a registry
/// contains duplicate names:
/// - [`get`](Self::get) stops at the first match and never records a miss,
///   so an absent name is rescanned on every call.
/// - The preferred-face scan visits the whole registry with the last match
///   winning, and retries on every access while its slot is empty.
pub struct FontCache {
    by_name: HashMap<String, FontHandle>,
    preferred_bold: Option<FontHandle>,
    preferred_regular: Option<FontHandle>,
}

impl FontCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            preferred_bold: None,
            preferred_regular: None,
        }
    }

    /// Handle of the preferred bold face, resolving it on first access
    ///
    /// Returns `None` when the registry holds no face named
    /// [`PREFERRED_BOLD`]; the slot then stays empty and the next access
    /// scans again.
    pub fn preferred_bold(&mut self, registry: &dyn FontRegistry) -> Option<FontHandle> {
        if self.preferred_bold.is_none() {
            self.scan_preferred(registry);
        }
        self.preferred_bold
    }

    /// Handle of the preferred regular face, resolving it on first access
    ///
    /// Same contract as [`preferred_bold`](Self::preferred_bold) for
    /// [`PREFERRED_REGULAR`].
    pub fn preferred_regular(&mut self, registry: &dyn FontRegistry) -> Option<FontHandle> {
        if self.preferred_regular.is_none() {
            self.scan_preferred(registry);
        }
        self.preferred_regular
    }

    /// Look up a font by name, scanning the registry on a cache miss
    ///
    /// The first matching resource in registry order wins and is
    /// remembered; later calls return the remembered handle without a
    /// scan. A name with no match returns `None` and is not remembered,
    /// so every later call scans the registry again.
    pub fn get(&mut self, registry: &dyn FontRegistry, name: &str) -> Option<FontHandle> {
        if let Some(&handle) = self.by_name.get(name) {
            return Some(handle);
        }

        log::debug!("Font cache miss for '{}', scanning registry", name);
        for entry in registry.fonts() {
            if entry.name == name {
                self.by_name.insert(entry.name, entry.handle);
                break;
            }
        }

        self.by_name.get(name).copied()
    }

    /// Get a remembered handle without scanning
    pub fn get_cached(&self, name: &str) -> Option<FontHandle> {
        self.by_name.get(name).copied()
    }

    /// Check whether a name has a remembered handle
    pub fn is_cached(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of remembered named lookups
    ///
    /// The preferred slots are tracked separately and not counted here.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check whether no named lookups are remembered
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Forget every remembered handle, including the preferred slots
    pub fn clear(&mut self) {
        self.by_name.clear();
        self.preferred_bold = None;
        self.preferred_regular = None;
    }

    /// Resolve both preferred faces in a single enumeration
    ///
    /// Visits the full registry without early exit; on duplicate names the
    /// last match keeps the slot.
    fn scan_preferred(&mut self, registry: &dyn FontRegistry) {
        log::debug!("Scanning registry for preferred faces");
        for entry in registry.fonts() {
            if entry.name == PREFERRED_BOLD {
                self.preferred_bold = Some(entry.handle);
            }
            if entry.name == PREFERRED_REGULAR {
                self.preferred_regular = Some(entry.handle);
            }
        }
        log::trace!(
            "Preferred faces resolved: bold={:?}, regular={:?}",
            self.preferred_bold,
            self.preferred_regular
        );
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::fonts::registry::{FontEntry, StaticFontRegistry};

    /// Registry stub that counts full enumerations
    struct CountingRegistry {
        inner: StaticFontRegistry,
        scans: Cell<usize>,
    }

    impl CountingRegistry {
        fn new() -> Self {
            Self {
                inner: StaticFontRegistry::new(),
                scans: Cell::new(0),
            }
        }

        fn insert(&mut self, name: &str) -> FontHandle {
            self.inner.insert(name)
        }

        fn scans(&self) -> usize {
            self.scans.get()
        }
    }

    impl FontRegistry for CountingRegistry {
        fn fonts(&self) -> Vec<FontEntry> {
            self.scans.set(self.scans.get() + 1);
            self.inner.fonts()
        }
    }

    #[test]
    fn test_named_lookup_scans_once() {
        let mut registry = CountingRegistry::new();
        let handle = registry.insert("Perpetua");
        let mut cache = FontCache::new();

        assert_eq!(cache.get(&registry, "Perpetua"), Some(handle));
        assert_eq!(cache.get(&registry, "Perpetua"), Some(handle));
        assert_eq!(registry.scans(), 1);
        assert!(cache.is_cached("Perpetua"));
        assert_eq!(cache.get_cached("Perpetua"), Some(handle));
    }

    #[test]
    fn test_missing_name_rescans_every_call() {
        let mut registry = CountingRegistry::new();
        registry.insert("Perpetua");
        let mut cache = FontCache::new();

        for expected_scans in 1..=3 {
            assert_eq!(cache.get(&registry, "Garamond"), None);
            assert_eq!(registry.scans(), expected_scans);
        }
        assert!(!cache.is_cached("Garamond"));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_preferred_pair_resolved_by_one_scan() {
        let mut registry = CountingRegistry::new();
        let bold = registry.insert(PREFERRED_BOLD);
        let regular = registry.insert(PREFERRED_REGULAR);
        let mut cache = FontCache::new();

        assert_eq!(cache.preferred_bold(&registry), Some(bold));
        assert_eq!(cache.preferred_regular(&registry), Some(regular));
        assert_ne!(bold, regular);
        assert_eq!(registry.scans(), 1);

        cache.preferred_bold(&registry);
        cache.preferred_regular(&registry);
        assert_eq!(registry.scans(), 1);
    }

    #[test]
    fn test_preferred_missing_rescans_every_access() {
        let mut registry = CountingRegistry::new();
        registry.insert("Perpetua");
        let mut cache = FontCache::new();

        assert_eq!(cache.preferred_bold(&registry), None);
        assert_eq!(cache.preferred_regular(&registry), None);
        assert_eq!(cache.preferred_bold(&registry), None);
        assert_eq!(registry.scans(), 3);
    }

    #[test]
    fn test_one_preferred_face_present() {
        let mut registry = CountingRegistry::new();
        let bold = registry.insert(PREFERRED_BOLD);
        let mut cache = FontCache::new();

        assert_eq!(cache.preferred_bold(&registry), Some(bold));
        // The regular slot is still empty, so its accessor scans again.
        assert_eq!(cache.preferred_regular(&registry), None);
        assert_eq!(registry.scans(), 2);
    }

    #[test]
    fn test_duplicate_names_last_match_wins_for_preferred() {
        let mut registry = CountingRegistry::new();
        registry.insert(PREFERRED_BOLD);
        let second = registry.insert(PREFERRED_BOLD);
        let mut cache = FontCache::new();

        assert_eq!(cache.preferred_bold(&registry), Some(second));
    }

    #[test]
    fn test_duplicate_names_first_match_wins_for_named() {
        let mut registry = CountingRegistry::new();
        let first = registry.insert("Perpetua");
        registry.insert("Perpetua");
        let mut cache = FontCache::new();

        assert_eq!(cache.get(&registry, "Perpetua"), Some(first));
    }

    #[test]
    fn test_clear_empties_preferred_slots() {
        let mut registry = CountingRegistry::new();
        let bold = registry.insert(PREFERRED_BOLD);
        let mut cache = FontCache::new();

        cache.preferred_bold(&registry);
        cache.get(&registry, PREFERRED_BOLD);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());

        // Both caches repopulate from fresh scans.
        assert_eq!(cache.preferred_bold(&registry), Some(bold));
        assert_eq!(registry.scans(), 3);
    }
}
