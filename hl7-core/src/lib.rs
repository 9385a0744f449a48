//! Core data model for turning parsed HL7 v2 messages into nested JSON records.

use std::collections::{hash_map::Entry, HashMap};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

mod flatten;

pub use flatten::{flatten, flatten_message};

/// Options that shape the keys of a flattened record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenConfig {
    /// Key children by their human-readable long name when one is known.
    pub use_long_names: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            use_long_names: true,
        }
    }
}

/// What a line-oriented driver does with a message that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Emit an empty record and keep going.
    #[default]
    EmptyRecord,
    /// Stop at the first failure.
    Abort,
}

/// One node of a parsed message: raw ER7 text at the leaves, named children above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNode {
    Leaf(String),
    Branch(Vec<Child>),
}

impl ParsedNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }
}

/// A named child of a [`ParsedNode::Branch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// Machine name such as `PID` or `PID_5`.
    pub name: String,
    /// Dictionary name such as `PATIENT_NAME`, when known.
    pub long_name: Option<String>,
    pub node: ParsedNode,
}

impl Child {
    pub fn new(name: impl Into<String>, node: ParsedNode) -> Self {
        Self {
            name: name.into(),
            long_name: None,
            node,
        }
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Key under which this child lands in a flattened record.
    pub fn key(&self, config: &FlattenConfig) -> String {
        match self.long_name.as_deref() {
            Some(long) if config.use_long_names && !long.is_empty() => long.to_lowercase(),
            _ => self.name.to_lowercase(),
        }
    }
}

/// Value stored under a record key.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatValue {
    Text(String),
    Record(FlatRecord),
}

/// Multi-map from lower-cased key to every value seen under it, in encounter order.
///
/// Keys keep first-seen order. Serialization writes a key with a single value as
/// that value and a key with several values as an array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    entries: Vec<(String, Vec<FlatValue>)>,
    index: HashMap<String, usize>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key`, after any values already stored there.
    pub fn push(&mut self, key: String, value: FlatValue) {
        match self.index.entry(key) {
            Entry::Occupied(slot) => self.entries[*slot.get()].1.push(value),
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), vec![value]));
                slot.insert(self.entries.len() - 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[FlatValue]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            match values.as_slice() {
                [single] => map.serialize_entry(key, single)?,
                many => map.serialize_entry(key, many)?,
            }
        }
        map.end()
    }
}

impl Serialize for FlatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

/// Reasons an ER7 message cannot be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Hl7Error {
    #[error("message contains no segments")]
    Empty,
    #[error("segment {index} has no recognizable segment id: {found:?}")]
    InvalidSegmentId { index: usize, found: String },
    #[error("invalid message header: {0}")]
    InvalidHeader(String),
}

impl Hl7Error {
    /// Stable label for logs that must not carry message content.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InvalidSegmentId { .. } => "invalid_segment_id",
            Self::InvalidHeader(_) => "invalid_header",
        }
    }
}
