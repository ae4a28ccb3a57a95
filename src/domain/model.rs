use crate::utils::escape::{escape, ELEMENT_SEPARATOR, GROUP_SEPARATOR, SEGMENT_TERMINATOR};
use std::fmt;

/// One positional data element of a segment, holding wire-ready text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataElement {
    /// A single value; empty means "not supplied".
    Scalar(String),
    /// Fixed-arity group rendered `:`-joined.
    Group(Vec<String>),
}

impl DataElement {
    /// Raw user text, escaped on entry.
    pub fn text(raw: &str) -> Self {
        DataElement::Scalar(escape(raw))
    }

    /// A literal that never contains reserved characters (codes, numbers).
    pub fn literal(value: impl Into<String>) -> Self {
        DataElement::Scalar(value.into())
    }

    pub fn empty() -> Self {
        DataElement::Scalar(String::new())
    }
}

impl fmt::Display for DataElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataElement::Scalar(value) => f.write_str(value),
            DataElement::Group(parts) => {
                for (index, part) in parts.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{}", GROUP_SEPARATOR)?;
                    }
                    f.write_str(part)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for DataElement {
    fn from(value: &str) -> Self {
        DataElement::literal(value)
    }
}

/// Ordered data elements of one segment. Order is fixed by segment type and
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldVector(Vec<DataElement>);

impl FieldVector {
    pub fn new(elements: Vec<DataElement>) -> Self {
        Self(elements)
    }

    pub fn elements(&self) -> &[DataElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataElement> {
        self.0.get(index)
    }

    /// Wire text of every element, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<DataElement>> for FieldVector {
    fn from(elements: Vec<DataElement>) -> Self {
        Self(elements)
    }
}

/// A fully laid out segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub segment_type: &'static str,
    pub version: u32,
    pub number: u32,
    pub elements: FieldVector,
}

impl Segment {
    /// Render `TYPE:number:version+e1+...+eN'`.
    pub fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.segment_type, GROUP_SEPARATOR, self.number, GROUP_SEPARATOR, self.version
        )?;
        for element in self.elements.elements() {
            write!(f, "{}{}", ELEMENT_SEPARATOR, element)?;
        }
        write!(f, "{}", SEGMENT_TERMINATOR)
    }
}
