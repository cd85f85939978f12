//! Hash map values.

use std::fmt;

use rustc_hash::FxHashMap;

use super::{Heap, Value};

/// The hashable subset of [`Value`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(Heap<str>),
}

impl HashKey {
    pub fn to_value(&self) -> Value {
        match self {
            HashKey::Integer(n) => Value::Integer(*n),
            HashKey::Boolean(b) => Value::Boolean(*b),
            HashKey::Str(s) => Value::Str(s.clone()),
        }
    }
}

/// Insertion-ordered map from [`HashKey`] to [`Value`].
///
/// Re-inserting a key replaces its value without moving it.
#[derive(Clone, Debug, Default)]
pub struct HashValue {
    entries: Vec<(HashKey, Value)>,
    index: FxHashMap<HashKey, usize>,
}

impl HashValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: HashKey, value: Value) {
        if let Some(&at) = self.index.get(&key) {
            self.entries[at].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.index.get(key).map(|&at| &self.entries[at].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&HashKey, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {value}", key.to_value())?;
        }
        f.write_str("}")
    }
}
