//! ER7 (pipe-delimited HL7 v2) parser producing [`ParsedNode`] trees, plus one-call
//! conversion into flattened records.

pub mod dictionary;

use dictionary::{DatatypeDef, FieldDef, SegmentDef};
use hl7_core::{flatten_message, Child, FlatRecord, FlattenConfig, Hl7Error, ParsedNode};

/// Segments whose first two fields are the delimiters themselves.
const HEADER_SEGMENTS: [&str; 3] = ["MSH", "FHS", "BHS"];

/// Separator characters of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub field: char,
    pub component: char,
    pub repetition: char,
    pub escape: char,
    pub subcomponent: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            field: '|',
            component: '^',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    }
}

impl Delimiters {
    /// Read the delimiters declared by a header segment such as `MSH|^~\&|...`.
    pub fn from_header(segment: &str) -> Result<Self, Hl7Error> {
        let mut chars = segment.chars().skip(3);
        let field = chars
            .next()
            .ok_or_else(|| Hl7Error::InvalidHeader("missing field separator".to_string()))?;
        if field.is_alphanumeric() || field.is_whitespace() {
            return Err(Hl7Error::InvalidHeader(format!(
                "unusable field separator {field:?}"
            )));
        }

        let encoding: Vec<char> = chars.take_while(|&c| c != field).collect();
        if encoding.is_empty() || encoding.len() > 4 {
            return Err(Hl7Error::InvalidHeader(format!(
                "expected 1 to 4 encoding characters, found {}",
                encoding.len()
            )));
        }
        if let Some(bad) = encoding.iter().find(|c| c.is_alphanumeric()) {
            return Err(Hl7Error::InvalidHeader(format!(
                "unusable encoding character {bad:?}"
            )));
        }

        let defaults = Self::default();
        let delimiters = Self {
            field,
            component: encoding[0],
            repetition: encoding.get(1).copied().unwrap_or(defaults.repetition),
            escape: encoding.get(2).copied().unwrap_or(defaults.escape),
            subcomponent: encoding.get(3).copied().unwrap_or(defaults.subcomponent),
        };

        let all = delimiters.as_array();
        if let Some(repeated) = all
            .iter()
            .enumerate()
            .find_map(|(index, c)| all[..index].contains(c).then_some(*c))
        {
            return Err(Hl7Error::InvalidHeader(format!(
                "delimiter {repeated:?} is used more than once"
            )));
        }
        Ok(delimiters)
    }

    fn as_array(&self) -> [char; 5] {
        [
            self.field,
            self.component,
            self.repetition,
            self.escape,
            self.subcomponent,
        ]
    }
}

/// Parse one ER7 message into a tree of segments, fields, components and subcomponents.
///
/// Segments may be separated by `\r`, `\n` or both. Leaves keep the raw ER7 text.
pub fn parse_message(message: &str) -> Result<ParsedNode, Hl7Error> {
    let segments: Vec<&str> = message
        .split(|c: char| c == '\r' || c == '\n')
        .filter(|segment| !segment.is_empty())
        .collect();

    let first = segments.first().ok_or(Hl7Error::Empty)?;
    let delimiters = if is_header(first) {
        Delimiters::from_header(first)?
    } else {
        Delimiters::default()
    };

    let children = segments
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_segment(index, raw, &delimiters))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedNode::Branch(children))
}

/// Parse and flatten one message, reporting parse failures.
pub fn convert_message_str(message: &str, config: &FlattenConfig) -> Result<FlatRecord, Hl7Error> {
    let tree = parse_message(message)?;
    Ok(flatten_message(&tree, config))
}

/// Parse and flatten one message; a message that does not parse yields an empty record.
pub fn convert_line(message: &str, config: &FlattenConfig) -> FlatRecord {
    convert_message_str(message, config).unwrap_or_default()
}

fn is_header(segment: &str) -> bool {
    HEADER_SEGMENTS
        .iter()
        .any(|id| segment.starts_with(id))
}

fn is_segment_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn parse_segment(index: usize, raw: &str, delimiters: &Delimiters) -> Result<Child, Hl7Error> {
    let (id, rest) = match raw.split_once(delimiters.field) {
        Some((id, rest)) => (id, Some(rest)),
        None => (raw, None),
    };
    if !is_segment_id(id) {
        return Err(Hl7Error::InvalidSegmentId {
            index,
            found: id.to_string(),
        });
    }

    let Some(rest) = rest else {
        return Ok(Child::new(id, ParsedNode::leaf(id)));
    };

    let definition = dictionary::segment(id);
    let mut pieces: Vec<&str> = rest.split(delimiters.field).collect();
    let mut fields = Vec::new();
    let mut first_position = 1;

    if HEADER_SEGMENTS.contains(&id) {
        let encoding = pieces.remove(0);
        fields.push(named_field(
            id,
            1,
            definition,
            ParsedNode::leaf(delimiters.field.to_string()),
        ));
        if !encoding.is_empty() {
            fields.push(named_field(id, 2, definition, ParsedNode::leaf(encoding)));
        }
        first_position = 3;
    }

    // OBX-5 is typed by OBX-2.
    let value_type = (id == "OBX")
        .then(|| pieces.get(1).copied())
        .flatten()
        .filter(|value| !value.is_empty());

    for (offset, text) in pieces.iter().enumerate() {
        let position = first_position + offset;
        let declared = definition
            .and_then(|def| def.field(position))
            .map(|field| field.datatype);
        let datatype_id = match (position, value_type) {
            (5, Some(value_type)) => Some(value_type),
            _ => declared,
        };
        let datatype = datatype_id.and_then(dictionary::datatype);
        let name = format!("{id}_{position}");

        for repetition in text
            .split(delimiters.repetition)
            .filter(|repetition| !repetition.is_empty())
        {
            if let Some(node) = field_node(repetition, &name, datatype, delimiters) {
                fields.push(named_field(id, position, definition, node));
            }
        }
    }

    if fields.is_empty() {
        return Ok(Child::new(id, ParsedNode::leaf(id)));
    }
    Ok(Child::new(id, ParsedNode::Branch(fields)))
}

fn named_field(
    segment_id: &str,
    position: usize,
    definition: Option<&SegmentDef>,
    node: ParsedNode,
) -> Child {
    let child = Child::new(format!("{segment_id}_{position}"), node);
    match definition.and_then(|def| def.field(position)) {
        Some(field) => child.with_long_name(field.long_name),
        None => child,
    }
}

fn field_node(
    text: &str,
    name: &str,
    datatype: Option<&DatatypeDef>,
    delimiters: &Delimiters,
) -> Option<ParsedNode> {
    match datatype {
        Some(datatype) if datatype.is_composite() => split_children(
            text,
            delimiters.component,
            datatype.id,
            Some(datatype),
            |piece, component_name, def| {
                let component_type = def.and_then(|def| dictionary::datatype(def.datatype));
                component_node(piece, component_name, component_type, delimiters)
            },
        ),
        None if text.contains(delimiters.component) => split_children(
            text,
            delimiters.component,
            name,
            None,
            |piece, component_name, _| component_node(piece, component_name, None, delimiters),
        ),
        _ => Some(ParsedNode::leaf(text)),
    }
}

/// Composite components always branch so their paths match with or without subcomponents.
fn component_node(
    text: &str,
    name: &str,
    datatype: Option<&DatatypeDef>,
    delimiters: &Delimiters,
) -> Option<ParsedNode> {
    let leaf = |piece: &str, _: &str, _: Option<&FieldDef>| Some(ParsedNode::leaf(piece));
    match datatype {
        Some(datatype) if datatype.is_composite() => split_children(
            text,
            delimiters.subcomponent,
            datatype.id,
            Some(datatype),
            leaf,
        ),
        _ if text.contains(delimiters.subcomponent) => {
            split_children(text, delimiters.subcomponent, name, None, leaf)
        }
        _ => Some(ParsedNode::leaf(text)),
    }
}

/// Split `text` on `separator` into children named `{prefix}_{k}`, skipping empty pieces.
///
/// Returns `None` when every piece is empty, so `^^` is dropped like an empty field.
fn split_children(
    text: &str,
    separator: char,
    prefix: &str,
    datatype: Option<&DatatypeDef>,
    build: impl Fn(&str, &str, Option<&FieldDef>) -> Option<ParsedNode>,
) -> Option<ParsedNode> {
    let children: Vec<Child> = text
        .split(separator)
        .enumerate()
        .filter(|(_, piece)| !piece.is_empty())
        .filter_map(|(offset, piece)| {
            let position = offset + 1;
            let name = format!("{prefix}_{position}");
            let def = datatype.and_then(|datatype| datatype.component(position));
            let child = Child::new(name.as_str(), build(piece, &name, def)?);
            Some(match def {
                Some(def) => child.with_long_name(def.long_name),
                None => child,
            })
        })
        .collect();
    (!children.is_empty()).then_some(ParsedNode::Branch(children))
}
