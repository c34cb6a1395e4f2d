//! Insertion-ordered term → value table.

use std::fmt;
use std::marker::PhantomData;

use ahash::AHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered map from term to value.
///
/// Keys keep the order in which they were first inserted. The table
/// serializes as a JSON object whose keys appear in that order.
///
/// # Examples
///
/// ```
/// use textlab::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// *table.entry_or("cat", 0) += 1;
/// *table.entry_or("dog", 0) += 1;
/// *table.entry_or("cat", 0) += 1;
///
/// assert_eq!(table.get("cat"), Some(&2));
/// assert_eq!(table.keys().collect::<Vec<_>>(), vec!["cat", "dog"]);
/// assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"cat":2,"dog":1}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyTable<V> {
    entries: Vec<(String, V)>,
    index: AHashMap<String, usize>,
}

impl<V> FrequencyTable<V> {
    pub fn new() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FrequencyTable {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite a value. A new key goes to the end; an existing
    /// key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// The value for `key`, inserting `default` at the end when absent.
    pub fn entry_or(&mut self, key: &str, default: V) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.to_string(), i);
                self.entries.push((key.to_string(), default));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A table with the same keys, in the same order, and mapped values.
    pub fn map_values<W>(&self, mut f: impl FnMut(&str, &V) -> W) -> FrequencyTable<W> {
        FrequencyTable {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), f(k, v)))
                .collect(),
            index: self.index.clone(),
        }
    }
}

impl<V> Default for FrequencyTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FrequencyTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<V: Serialize> Serialize for FrequencyTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct TableVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for TableVisitor<V> {
    type Value = FrequencyTable<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of terms to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = FrequencyTable::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            table.insert(key, value);
        }
        Ok(table)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for FrequencyTable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}
