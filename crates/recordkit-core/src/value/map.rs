use crate::value::Value;
use derive_more::IntoIterator;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

///
/// Map
///
/// Insertion-ordered string-keyed map.
///
/// - Keys are unique; inserting an existing key replaces the value in place.
/// - Iteration and serialization follow insertion order.
/// - Equality is associative: two maps are equal when they hold the same
///   key/value pairs, regardless of order.
///
/// Entries keep the order; `index` maps each key to its entry position so
/// lookups and inserts do not scan.
///

#[derive(Clone, Default, IntoIterator)]
pub struct Map {
    #[into_iterator(owned, ref)]
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl Map {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key. An explicit `Null` entry is returned as `Some(&Null)`,
    /// which callers must keep distinct from an absent key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or replace, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);

        for (k, _) in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(k) {
                *slot -= 1;
            }
        }

        Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| o == value))
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);

        map
    }
}

impl<K, V> Extend<(K, V)> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.entries.reserve(lower);
        self.index.reserve(lower);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, Value>> for Map {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Map> for BTreeMap<String, Value> {
    fn from(map: Map) -> Self {
        map.entries.into_iter().collect()
    }
}
