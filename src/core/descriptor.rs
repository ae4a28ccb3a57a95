//! Descriptor layout engine.
//!
//! A segment is declared as an ordered list of [`FieldDescriptor`]s. The
//! engine validates one optional [`FieldValue`] per descriptor and lays the
//! values out in declaration order. Unset optional fields at the end are
//! dropped; unset fields in between become empty placeholders so every
//! later field keeps its position.

use crate::domain::model::{DataElement, FieldVector};
use crate::domain::ports::LayoutStrategy;
use crate::utils::error::{Result, SegmentError};
use crate::utils::escape::escape;
use crate::utils::validation::{
    validate_code, validate_country, validate_max_length, validate_numeric,
};

/// Identifiers (customer id, system id) are limited to 30 characters.
pub const IDENTIFIER_MAX_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// `id`: free text up to 30 characters.
    Identifier,
    /// `num`: digits without leading zeros.
    Numeric,
    /// `an`: free text.
    Alphanumeric,
    /// `code`: one value of an enumerated domain.
    Code,
    /// `ctr`: three digit country code.
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Required,
    Optional,
    /// Up to `max_count` values; zero values leaves the field unset.
    Repeated { max_count: usize },
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Element(FieldType),
    Group(&'static [FieldDescriptor]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub domain: Option<&'static [&'static str]>,
    pub arity: Arity,
}

impl FieldDescriptor {
    pub const fn element(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            kind: FieldKind::Element(field_type),
            max_length: None,
            domain: None,
            arity: Arity::Required,
        }
    }

    pub const fn group(name: &'static str, members: &'static [FieldDescriptor]) -> Self {
        Self {
            name,
            kind: FieldKind::Group(members),
            max_length: None,
            domain: None,
            arity: Arity::Required,
        }
    }

    pub const fn max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn domain(self, codes: &'static [&'static str]) -> Self {
        Self {
            domain: Some(codes),
            ..self
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            arity: Arity::Optional,
            ..self
        }
    }

    pub const fn repeated(self, max_count: usize) -> Self {
        Self {
            arity: Arity::Repeated { max_count },
            ..self
        }
    }
}

/// Value supplied for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u64),
    Group(Vec<Option<FieldValue>>),
    Repeated(Vec<FieldValue>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn code(code: &'static str) -> Self {
        FieldValue::Text(code.to_string())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(u64::from(value))
    }
}

fn qualified(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn shape_error(field: &str, value: &FieldValue, reason: &str) -> SegmentError {
    SegmentError::FieldValidationError {
        field: field.to_string(),
        value: format!("{:?}", value),
        reason: reason.to_string(),
    }
}

/// Validate and render a single value. Text is escaped here.
fn encode_scalar(
    field: &str,
    descriptor: &FieldDescriptor,
    field_type: FieldType,
    value: &FieldValue,
) -> Result<String> {
    let raw = match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(number) => match field_type {
            FieldType::Country => format!("{:03}", number),
            _ => number.to_string(),
        },
        FieldValue::Group(_) | FieldValue::Repeated(_) => {
            return Err(shape_error(field, value, "Expected a single value"));
        }
    };

    match field_type {
        FieldType::Numeric => validate_numeric(field, &raw)?,
        FieldType::Country => validate_country(field, &raw)?,
        FieldType::Code => {
            if let Some(codes) = descriptor.domain {
                validate_code(field, &raw, codes)?;
            }
        }
        FieldType::Identifier | FieldType::Alphanumeric => {}
    }

    let max_length = match (field_type, descriptor.max_length) {
        (_, Some(max)) => Some(max),
        (FieldType::Identifier, None) => Some(IDENTIFIER_MAX_LENGTH),
        _ => None,
    };
    if let Some(max) = max_length {
        validate_max_length(field, &raw, max)?;
    }

    // Codes without a domain are free text too.
    Ok(match field_type {
        FieldType::Identifier | FieldType::Alphanumeric | FieldType::Code => escape(&raw),
        FieldType::Numeric | FieldType::Country => raw,
    })
}

/// Components of one occurrence of a field, before placeholder handling.
fn encode_occurrence(
    field: &str,
    descriptor: &FieldDescriptor,
    value: &FieldValue,
) -> Result<Vec<String>> {
    match descriptor.kind {
        FieldKind::Element(field_type) => {
            Ok(vec![encode_scalar(field, descriptor, field_type, value)?])
        }
        FieldKind::Group(members) => match value {
            FieldValue::Group(values) => layout_members(field, members, values),
            other => Err(shape_error(field, other, "Expected a data element group")),
        },
    }
}

/// Number of components one occurrence of `descriptor` takes in a group.
fn width(descriptor: &FieldDescriptor) -> usize {
    match descriptor.kind {
        FieldKind::Element(_) => 1,
        FieldKind::Group(members) => members.iter().map(width).sum(),
    }
}

fn check_value_count(
    prefix: &str,
    descriptors: &[FieldDescriptor],
    values: &[Option<FieldValue>],
) -> Result<()> {
    if values.len() != descriptors.len() {
        return Err(SegmentError::FieldValidationError {
            field: if prefix.is_empty() {
                "<segment>".to_string()
            } else {
                prefix.to_string()
            },
            value: values.len().to_string(),
            reason: format!("Expected {} values, one per field", descriptors.len()),
        });
    }
    Ok(())
}

/// Components of a group occurrence. Unset members keep their full width,
/// so later members never shift.
fn layout_members(
    prefix: &str,
    members: &[FieldDescriptor],
    values: &[Option<FieldValue>],
) -> Result<Vec<String>> {
    check_value_count(prefix, members, values)?;

    let mut parts = Vec::new();
    for (member, value) in members.iter().zip(values) {
        match encode_field(prefix, member, value.as_ref())? {
            Some(DataElement::Scalar(value)) => parts.push(value),
            Some(DataElement::Group(components)) => parts.extend(components),
            None => parts.extend(std::iter::repeat(String::new()).take(width(member))),
        }
    }
    Ok(parts)
}

fn into_element(mut parts: Vec<String>) -> DataElement {
    if parts.len() == 1 {
        DataElement::Scalar(parts.remove(0))
    } else {
        DataElement::Group(parts)
    }
}

/// `Ok(None)` when the field is unset and allowed to be.
fn encode_field(
    prefix: &str,
    descriptor: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<Option<DataElement>> {
    let field = qualified(prefix, descriptor.name);

    match (descriptor.arity, value) {
        (Arity::Required, None) => Err(SegmentError::MissingFieldError { field }),
        (Arity::Optional, None) | (Arity::Repeated { .. }, None) => Ok(None),
        (Arity::Repeated { max_count }, Some(value)) => {
            let items: Vec<&FieldValue> = match value {
                FieldValue::Repeated(items) => items.iter().collect(),
                single => vec![single],
            };
            if items.len() > max_count {
                return Err(SegmentError::ArityError {
                    field,
                    count: items.len(),
                    max: max_count,
                });
            }
            if items.is_empty() {
                return Ok(None);
            }
            let mut parts = Vec::new();
            for item in items {
                parts.extend(encode_occurrence(&field, descriptor, item)?);
            }
            Ok(Some(into_element(parts)))
        }
        (_, Some(value)) => {
            let parts = encode_occurrence(&field, descriptor, value)?;
            Ok(Some(into_element(parts)))
        }
    }
}

/// Segment level: only here is the trailing run of unset fields dropped.
fn layout_fields(
    descriptors: &[FieldDescriptor],
    values: &[Option<FieldValue>],
) -> Result<Vec<DataElement>> {
    check_value_count("", descriptors, values)?;

    let mut encoded = Vec::with_capacity(descriptors.len());
    for (descriptor, value) in descriptors.iter().zip(values) {
        encoded.push(encode_field("", descriptor, value.as_ref())?);
    }

    while matches!(encoded.last(), Some(None)) {
        encoded.pop();
    }

    Ok(encoded
        .into_iter()
        .map(|element| element.unwrap_or_else(DataElement::empty))
        .collect())
}

/// Validate `values` against `descriptors` and lay them out in order.
pub fn serialize(
    descriptors: &[FieldDescriptor],
    values: &[Option<FieldValue>],
) -> Result<FieldVector> {
    layout_fields(descriptors, values).map(FieldVector::new)
}

/// A segment whose layout comes from field descriptors.
#[derive(Debug, Clone)]
pub struct DescriptorLayout {
    segment_type: &'static str,
    version: u32,
    descriptors: &'static [FieldDescriptor],
    values: Vec<Option<FieldValue>>,
}

impl DescriptorLayout {
    pub fn new(
        segment_type: &'static str,
        version: u32,
        descriptors: &'static [FieldDescriptor],
        values: Vec<Option<FieldValue>>,
    ) -> Self {
        Self {
            segment_type,
            version,
            descriptors,
            values,
        }
    }
}

impl LayoutStrategy for DescriptorLayout {
    fn segment_type(&self) -> &'static str {
        self.segment_type
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn layout(&self) -> Result<FieldVector> {
        let vector = serialize(self.descriptors, &self.values)?;
        tracing::debug!(
            segment = self.segment_type,
            version = self.version,
            elements = vector.len(),
            "Descriptor layout built"
        );
        Ok(vector)
    }
}
