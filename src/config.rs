//! Per-column format and width configuration
//!
//! Raw configuration keys may name a single column, a group of columns
//! sharing one value, or the wildcard `all`. [`RawConfig::flatten`] expands
//! that into one effective value per column name. Bag values merge key-wise
//! (later entries win per option, wildcard options are low-priority
//! defaults); scalar values take the last declaration, and the wildcard is
//! applied positionally by the assembler only where no explicit entry
//! exists.

use crate::types::FormatBag;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Reserved configuration key applied to every column
pub const WILDCARD: &str = "all";

/// A raw configuration key: one column, a group, or the wildcard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigKey {
    /// A single column name
    Column(String),
    /// Several columns sharing the same configured value
    Group(Vec<String>),
    /// The `all` wildcard
    All,
}

impl ConfigKey {
    fn names(&self) -> Vec<&str> {
        match self {
            ConfigKey::Column(name) => vec![name.as_str()],
            ConfigKey::Group(names) => names.iter().map(String::as_str).collect(),
            ConfigKey::All => vec![WILDCARD],
        }
    }
}

impl From<&str> for ConfigKey {
    fn from(name: &str) -> Self {
        if name == WILDCARD {
            ConfigKey::All
        } else {
            ConfigKey::Column(name.to_string())
        }
    }
}

impl From<String> for ConfigKey {
    fn from(name: String) -> Self {
        ConfigKey::from(name.as_str())
    }
}

impl<const N: usize> From<[&str; N]> for ConfigKey {
    fn from(names: [&str; N]) -> Self {
        ConfigKey::Group(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<Vec<String>> for ConfigKey {
    fn from(names: Vec<String>) -> Self {
        ConfigKey::Group(names)
    }
}

/// How configured values combine when several raw entries hit the same column
pub trait MergeValue: Clone {
    /// A later declaration for the same column arrives
    fn combine(&mut self, incoming: &Self);

    /// The wildcard's value is offered as a low-priority default
    fn absorb_default(&mut self, default: &Self);
}

impl MergeValue for FormatBag {
    fn combine(&mut self, incoming: &Self) {
        self.merge_over(incoming);
    }

    fn absorb_default(&mut self, default: &Self) {
        self.merge_under(default);
    }
}

impl MergeValue for f64 {
    fn combine(&mut self, incoming: &Self) {
        *self = *incoming;
    }

    // Explicit scalars always win; the wildcard never rewrites them.
    fn absorb_default(&mut self, _default: &Self) {}
}

/// Ordered raw configuration entries, as declared by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig<V> {
    entries: Vec<(ConfigKey, V)>,
}

impl<V> Default for RawConfig<V> {
    fn default() -> Self {
        RawConfig {
            entries: Vec::new(),
        }
    }
}

impl<V> RawConfig<V> {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, consuming and returning the config (builder style)
    pub fn with(mut self, key: impl Into<ConfigKey>, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Append an entry in place
    pub fn set(&mut self, key: impl Into<ConfigKey>, value: V) {
        self.entries.push((key.into(), value));
    }

    /// Number of raw entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand groups and the wildcard into one effective value per column
    pub fn flatten(&self) -> FlatConfig<V>
    where
        V: MergeValue,
    {
        let mut flat: IndexMap<String, V> = IndexMap::new();
        for (key, value) in &self.entries {
            for name in key.names() {
                match flat.entry(name.to_string()) {
                    Entry::Occupied(mut existing) => existing.get_mut().combine(value),
                    Entry::Vacant(slot) => {
                        slot.insert(value.clone());
                    }
                }
            }
        }

        if let Some(all) = flat.get(WILDCARD).cloned() {
            for (name, value) in flat.iter_mut() {
                if name != WILDCARD {
                    value.absorb_default(&all);
                }
            }
        }

        FlatConfig { entries: flat }
    }
}

/// Flattened configuration: one merged value per column name
///
/// The wildcard entry, if declared, stays retrievable under its own key in
/// addition to having been merged into every bag-valued sibling.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatConfig<V> {
    entries: IndexMap<String, V>,
}

impl<V> FlatConfig<V> {
    /// Get the effective value for a column name
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Get the wildcard value, if one was declared
    pub fn wildcard(&self) -> Option<&V> {
        self.entries.get(WILDCARD)
    }

    /// Iterate over all entries in first-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over per-column entries, skipping the wildcard
    pub fn iter_named(&self) -> impl Iterator<Item = (&str, &V)> {
        self.iter().filter(|(name, _)| *name != WILDCARD)
    }

    /// Number of flattened entries (including the wildcard)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the flattened configuration is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
