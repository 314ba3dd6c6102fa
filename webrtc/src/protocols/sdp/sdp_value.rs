//! Loosely typed values produced by the grammar-driven parser.
//!
//! The parser and writer only know field names and primitive types from the
//! grammar table, so every record is a map of [`SdpValue`]s. Typed views are
//! built on top of these records by the session model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SdpValue {
    Int(i64),
    UInt(u64),
    Text(String),
    Record(SdpRecord),
    List(Vec<SdpRecord>),
}

impl SdpValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SdpValue::Int(value) => Some(*value),
            SdpValue::UInt(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            SdpValue::UInt(value) => Some(*value),
            SdpValue::Int(value) => u64::try_from(*value).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SdpValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&SdpRecord> {
        match self {
            SdpValue::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[SdpRecord]> {
        match self {
            SdpValue::List(list) => Some(list),
            _ => None,
        }
    }
}

/// Renders primitives the way they appear on the wire. Nested values have
/// no textual form and render as nothing.
impl fmt::Display for SdpValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SdpValue::Int(value) => write!(f, "{}", value),
            SdpValue::UInt(value) => write!(f, "{}", value),
            SdpValue::Text(value) => write!(f, "{}", value),
            SdpValue::Record(_) | SdpValue::List(_) => Ok(()),
        }
    }
}

impl From<i64> for SdpValue {
    fn from(value: i64) -> Self {
        SdpValue::Int(value)
    }
}

impl From<u64> for SdpValue {
    fn from(value: u64) -> Self {
        SdpValue::UInt(value)
    }
}

impl From<&str> for SdpValue {
    fn from(value: &str) -> Self {
        SdpValue::Text(value.to_string())
    }
}

impl From<String> for SdpValue {
    fn from(value: String) -> Self {
        SdpValue::Text(value)
    }
}

impl From<SdpRecord> for SdpValue {
    fn from(record: SdpRecord) -> Self {
        SdpValue::Record(record)
    }
}

/// A named bag of values: the session root, one media section, one
/// collection entry or one nested singleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SdpRecord(BTreeMap<String, SdpValue>);

impl SdpRecord {
    pub fn new() -> Self {
        SdpRecord(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&SdpValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert<V: Into<SdpValue>>(&mut self, key: &str, value: V) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<SdpValue> {
        self.0.remove(key)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(SdpValue::as_i64)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(SdpValue::as_u64)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SdpValue::as_str)
    }

    pub fn get_record(&self, key: &str) -> Option<&SdpRecord> {
        self.get(key).and_then(SdpValue::as_record)
    }

    pub fn get_list(&self, key: &str) -> Option<&[SdpRecord]> {
        self.get(key).and_then(SdpValue::as_list)
    }

    /// Appends `entry` to the list stored under `key`, creating the list on
    /// first use. A non-list value under `key` is replaced.
    pub fn push_to_list(&mut self, key: &str, entry: SdpRecord) {
        let mut list = match self.0.remove(key) {
            Some(SdpValue::List(list)) => list,
            _ => Vec::new(),
        };
        list.push(entry);
        self.0.insert(key.to_string(), SdpValue::List(list));
    }

    /// Makes sure an (possibly empty) list exists under `key`.
    pub fn ensure_list(&mut self, key: &str) {
        if self.get_list(key).is_none() {
            self.0.insert(key.to_string(), SdpValue::List(Vec::new()));
        }
    }

    /// Merges `fields` into the record stored under `key`. The stored record
    /// is read, updated and written back as a whole.
    pub fn merge_into_record(&mut self, key: &str, fields: SdpRecord) {
        let mut nested = match self.0.remove(key) {
            Some(SdpValue::Record(record)) => record,
            _ => SdpRecord::new(),
        };
        nested.extend(fields);
        self.0.insert(key.to_string(), SdpValue::Record(nested));
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, SdpValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<(String, SdpValue)> for SdpRecord {
    fn extend<T: IntoIterator<Item = (String, SdpValue)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for SdpRecord {
    type Item = (String, SdpValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, SdpValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, SdpValue)> for SdpRecord {
    fn from_iter<T: IntoIterator<Item = (K, SdpValue)>>(iter: T) -> Self {
        SdpRecord(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
