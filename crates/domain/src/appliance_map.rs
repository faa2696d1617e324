//! Order-preserving `name → value` map used for per-appliance predictions.
//!
//! The prediction service returns JSON objects keyed by appliance name and
//! makes no promise about key order. [`ApplianceMap`] keeps whatever order
//! the document had, so rendering never reorders silently and two maps
//! (predictions and alerts) can be paired by name instead of by position.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON object deserialized as an ordered list of `(name, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for ApplianceMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ApplianceMap<T> {
    /// Look up the value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for ApplianceMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<T: Serialize> Serialize for ApplianceMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ApplianceMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ApplianceMapVisitor<T> {
    type Value = ApplianceMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object keyed by appliance name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, T)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            // Duplicate keys: the last one wins but keeps the first position.
            if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == key) {
                slot.1 = value;
            } else {
                entries.push((key, value));
            }
        }
        Ok(ApplianceMap { entries })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApplianceMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ApplianceMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_document_order() {
        let map: ApplianceMap<f64> =
            serde_json::from_str(r#"{"Washer": 1.0, "AC": 2.0, "Fan": 3.0}"#).unwrap();
        let names: Vec<_> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Washer", "AC", "Fan"]);
    }

    #[test]
    fn should_look_up_by_name() {
        let map: ApplianceMap<String> =
            serde_json::from_str(r#"{"AC": "Normal performance."}"#).unwrap();
        assert_eq!(map.get("AC").map(String::as_str), Some("Normal performance."));
        assert!(map.get("Fan").is_none());
    }

    #[test]
    fn should_serialize_back_in_same_order() {
        let json = r#"{"b":2.0,"a":1.0}"#;
        let map: ApplianceMap<f64> = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&map).unwrap(), json);
    }

    #[test]
    fn should_let_last_duplicate_win_in_first_position() {
        let map: ApplianceMap<u8> = serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        let entries: Vec<_> = map.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(entries, [("a", 3), ("b", 2)]);
    }

    #[test]
    fn should_reject_non_object() {
        assert!(serde_json::from_str::<ApplianceMap<f64>>("[1, 2]").is_err());
    }

    #[test]
    fn should_build_from_iterator() {
        let map: ApplianceMap<f64> = [("A", 10.0), ("B", 5.555)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}
