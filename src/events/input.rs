//! Key names and key snapshots.
//!
//! The input backend reports the keys currently held as a [`KeySnapshot`].
//! Press/release edges are resolved by the backend; the engine only ever sees
//! "what is down right now".

use rustc_hash::FxHashSet;
use std::fmt;

/// Name of a keyboard key, stored lower-case (`"w"`, `"space"`, `"up"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a key name.
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::new(name)
    }
}

/// The set of keys held down at the moment the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    keys: FxHashSet<Key>,
}

impl KeySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held. Holding an already held key is a no-op.
    pub fn press(&mut self, key: impl Into<Key>) {
        self.keys.insert(key.into());
    }

    pub fn release(&mut self, key: impl Into<Key>) {
        self.keys.remove(&key.into());
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_down(&self, name: &str) -> bool {
        self.keys.iter().any(|k| k.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeySnapshot {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
