//! Versioned layout resolution for HKTAN.
//!
//! Later versions of the standard inserted optional fields between existing
//! ones, so the position of the reference and the medium moves from version
//! to version. Every supported combination is one row in [`TAN_TEMPLATES`].

use crate::core::positional::PositionalLayout;
use crate::core::segments::HKTAN;
use crate::domain::codes::TanProcess;
use crate::domain::model::{DataElement, FieldVector};
use crate::domain::ports::LayoutStrategy;
use crate::utils::error::{Result, SegmentError};
use crate::utils::validation::{validate_max_length, validate_required_field};

pub const MIN_TAN_VERSION: u32 = 3;
pub const MAX_TAN_VERSION: u32 = 6;
pub const SUPPORTED_TAN_VERSIONS: &[u32] = &[3, 4, 5, 6];

/// Auftragsreferenz, an..35.
pub const AREF_MAX_LENGTH: usize = 35;
/// TAN-Medium-Bezeichnung, an..32.
pub const MEDIUM_MAX_LENGTH: usize = 32;

/// Flag closing a continued TAN process: no further TAN follows.
const NO_FURTHER_TAN: &str = "N";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Process,
    Aref,
    Medium,
    Empty,
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub operation: &'static str,
    pub version: u32,
    pub process: TanProcess,
    pub has_medium: bool,
}

impl VariantKey {
    /// The continue family has a single layout per version, medium or not.
    pub fn tan(process: TanProcess, version: u32, has_medium: bool) -> Self {
        Self {
            operation: HKTAN,
            version,
            process,
            has_medium: has_medium && process == TanProcess::Initiate,
        }
    }
}

pub struct Template {
    pub key: VariantKey,
    pub slots: &'static [Slot],
}

const fn row(
    process: TanProcess,
    version: u32,
    has_medium: bool,
    slots: &'static [Slot],
) -> Template {
    Template {
        key: VariantKey {
            operation: HKTAN,
            version,
            process,
            has_medium,
        },
        slots,
    }
}

use Slot::{Aref, Empty as E, Literal, Medium, Process};
use TanProcess::{Continue, Initiate};

pub static TAN_TEMPLATES: &[Template] = &[
    row(Initiate, 3, false, &[Process]),
    row(Initiate, 4, false, &[Process]),
    row(Initiate, 5, false, &[Process]),
    row(Initiate, 6, false, &[Process]),
    row(Initiate, 3, true, &[Process, E, E, E, E, E, E, E, Medium]),
    row(Initiate, 4, true, &[Process, E, E, E, E, E, E, E, E, Medium]),
    row(Initiate, 5, true, &[Process, E, E, E, E, E, E, E, E, E, E, Medium]),
    row(Initiate, 6, true, &[Process, E, E, E, E, E, E, E, E, E, Medium]),
    row(Continue, 3, false, &[Process, E, Aref, E, Literal(NO_FURTHER_TAN)]),
    row(Continue, 4, false, &[Process, E, Aref, E, Literal(NO_FURTHER_TAN)]),
    row(Continue, 5, false, &[Process, E, E, E, Aref, E, Literal(NO_FURTHER_TAN)]),
    row(Continue, 6, false, &[Process, E, E, E, Aref, Literal(NO_FURTHER_TAN)]),
];

pub fn lookup(key: &VariantKey) -> Result<&'static [Slot]> {
    TAN_TEMPLATES
        .iter()
        .find(|template| template.key == *key)
        .map(|template| template.slots)
        .ok_or_else(|| SegmentError::unsupported(key.operation, format!("{:?}", key)))
}

/// Parameters of one HKTAN segment, checked against the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TanVariant {
    process: TanProcess,
    version: u32,
    aref: Option<String>,
    medium: Option<String>,
}

impl TanVariant {
    pub fn new(
        process: &str,
        version: u32,
        aref: Option<&str>,
        medium: Option<&str>,
    ) -> Result<Self> {
        let process = TanProcess::from_code(process).ok_or_else(|| {
            SegmentError::unsupported(HKTAN, format!("process {} is not implemented", process))
        })?;
        if !SUPPORTED_TAN_VERSIONS.contains(&version) {
            return Err(SegmentError::unsupported(
                HKTAN,
                format!("version {} is not implemented", version),
            ));
        }

        Ok(Self {
            process,
            version,
            aref: aref.filter(|a| !a.is_empty()).map(str::to_string),
            medium: medium.filter(|m| !m.is_empty()).map(str::to_string),
        })
    }

    pub fn key(&self) -> VariantKey {
        VariantKey::tan(self.process, self.version, self.medium.is_some())
    }

    fn fill(&self, slots: &[Slot]) -> Result<Vec<DataElement>> {
        let mut elements = Vec::with_capacity(slots.len());
        for slot in slots {
            let element = match slot {
                Slot::Process => DataElement::literal(self.process.code()),
                Slot::Aref => {
                    let aref = validate_required_field("aref", &self.aref)?;
                    validate_max_length("aref", aref, AREF_MAX_LENGTH)?;
                    DataElement::text(aref)
                }
                Slot::Medium => {
                    let medium = validate_required_field("medium", &self.medium)?;
                    validate_max_length("medium", medium, MEDIUM_MAX_LENGTH)?;
                    DataElement::text(medium)
                }
                Slot::Empty => DataElement::empty(),
                Slot::Literal(value) => DataElement::literal(*value),
            };
            elements.push(element);
        }
        Ok(elements)
    }

    pub fn into_layout(self) -> Result<PositionalLayout> {
        let elements = self.fill(lookup(&self.key())?)?;
        Ok(PositionalLayout::new(HKTAN, self.version, elements))
    }
}

impl LayoutStrategy for TanVariant {
    fn segment_type(&self) -> &'static str {
        HKTAN
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn layout(&self) -> Result<FieldVector> {
        let key = self.key();
        let slots = lookup(&key)?;
        let elements = self.fill(slots)?;
        tracing::debug!(
            process = self.process.code(),
            version = self.version,
            has_medium = key.has_medium,
            elements = elements.len(),
            "HKTAN variant resolved"
        );
        Ok(FieldVector::new(elements))
    }
}

/// Resolve the HKTAN field vector for `(process, version, aref, medium)`.
pub fn resolve_tan(
    process: &str,
    version: u32,
    aref: Option<&str>,
    medium: Option<&str>,
) -> Result<FieldVector> {
    TanVariant::new(process, version, aref, medium)?.layout()
}
