//! # Configuration Store
//!
//! In-memory cache of resolved documents, one slot per kind.

use crate::documents::ConfigDocument;
use crate::kind::ConfigKind;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-wide document cache.
///
/// Constructed once and shared by `Arc`. Entries are whole documents: a slot
/// is either empty or holds a complete, parsed value.
#[derive(Debug, Default)]
pub struct ConfigStore {
    entries: RwLock<HashMap<ConfigKind, ConfigDocument>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ConfigKind) -> Option<ConfigDocument> {
        self.entries.read().get(&kind).cloned()
    }

    /// Inserts or overwrites the entry for `kind`.
    pub fn put(&self, kind: ConfigKind, document: ConfigDocument) {
        debug_assert_eq!(kind, document.kind());
        self.entries.write().insert(kind, document);
    }

    /// Removes one entry, or every entry when `kind` is `None`.
    pub fn clear(&self, kind: Option<ConfigKind>) {
        let mut entries = self.entries.write();
        match kind {
            Some(kind) => {
                entries.remove(&kind);
            }
            None => entries.clear(),
        }
    }

    pub fn contains(&self, kind: ConfigKind) -> bool {
        self.entries.read().contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Kinds currently cached.
    pub fn cached_kinds(&self) -> Vec<ConfigKind> {
        let entries = self.entries.read();
        ConfigKind::ALL
            .into_iter()
            .filter(|k| entries.contains_key(k))
            .collect()
    }
}
