use crate::{FlatRecord, FlatValue, FlattenConfig, ParsedNode};

/// Convert a parsed node into a value with the same topology.
///
/// Leaves pass through as their raw text. Branches become records keyed by
/// [`crate::Child::key`]; same-named siblings accumulate in encounter order.
pub fn flatten(node: &ParsedNode, config: &FlattenConfig) -> FlatValue {
    match node {
        ParsedNode::Leaf(text) => FlatValue::Text(text.clone()),
        ParsedNode::Branch(children) => {
            let mut record = FlatRecord::new();
            for child in children {
                record.push(child.key(config), flatten(&child.node, config));
            }
            FlatValue::Record(record)
        }
    }
}

/// Flatten a message root into a record. A bare leaf root has no keys.
pub fn flatten_message(root: &ParsedNode, config: &FlattenConfig) -> FlatRecord {
    match flatten(root, config) {
        FlatValue::Record(record) => record,
        FlatValue::Text(_) => FlatRecord::new(),
    }
}
