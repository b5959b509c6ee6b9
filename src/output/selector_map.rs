use serde::ser::{Serialize, SerializeMap, Serializer};

/// Builds the positional identifier for the pattern at `index`
pub fn selector_key(index: usize) -> String {
    format!("selector_{}", index)
}

/// Per-pattern results keyed by `selector_<index>`, kept in input order
///
/// Serializes as a JSON object whose keys appear in pattern order, so
/// `selector_10` follows `selector_9` rather than `selector_1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> SelectorMap<T> {
    /// Returns the entry for a key such as `selector_0`
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<T> FromIterator<T> for SelectorMap<T> {
    /// Keys each value by its position in the iterator
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .enumerate()
            .map(|(index, value)| (selector_key(index), value))
            .collect();
        Self { entries }
    }
}

impl<T: Serialize> Serialize for SelectorMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
