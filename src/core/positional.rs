//! Fixed positional layouts of the legacy segments.
//!
//! Each builder returns the value list for exactly one (type, version) pair.
//! User text is escaped as it is placed.

use crate::core::segments::{HKIDN, HKSYN, HKTAB, HKVVB};
use crate::domain::codes::{Language, SynchronisationMode, TanMediaClass4, TanMediaType};
use crate::domain::model::{DataElement, FieldVector};
use crate::domain::ports::LayoutStrategy;
use crate::utils::error::Result;
use crate::utils::escape::escape;

/// ISO 3166 numeric code for Germany.
pub const COUNTRY_CODE_DE: &str = "280";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalLayout {
    segment_type: &'static str,
    version: u32,
    elements: FieldVector,
}

impl PositionalLayout {
    pub fn new(segment_type: &'static str, version: u32, elements: Vec<DataElement>) -> Self {
        Self {
            segment_type,
            version,
            elements: FieldVector::new(elements),
        }
    }

    pub fn elements(&self) -> &FieldVector {
        &self.elements
    }
}

impl LayoutStrategy for PositionalLayout {
    fn segment_type(&self) -> &'static str {
        self.segment_type
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn layout(&self) -> Result<FieldVector> {
        Ok(self.elements.clone())
    }
}

/// HKIDN version 2. System id defaults to `0`, customer id to `1`.
pub fn identification(
    country_code: &str,
    blz: &str,
    username: &str,
    system_id: Option<&str>,
    customer_id: Option<u32>,
) -> PositionalLayout {
    PositionalLayout::new(
        HKIDN,
        2,
        vec![
            DataElement::Group(vec![escape(country_code), escape(blz)]),
            DataElement::text(username),
            DataElement::text(system_id.unwrap_or("0")),
            DataElement::literal(customer_id.unwrap_or(1).to_string()),
        ],
    )
}

/// HKVVB version 3 with BPD and UPD version `0`.
pub fn processing_preparation(
    language: Language,
    product_name: &str,
    product_version: &str,
) -> PositionalLayout {
    PositionalLayout::new(
        HKVVB,
        3,
        vec![
            DataElement::literal("0"),
            DataElement::literal("0"),
            DataElement::literal(language.code()),
            DataElement::text(product_name),
            DataElement::text(product_version),
        ],
    )
}

/// HKSYN version 3.
pub fn synchronisation(mode: SynchronisationMode) -> PositionalLayout {
    PositionalLayout::new(HKSYN, 3, vec![DataElement::literal(mode.code())])
}

/// HKTAB version 5, asking for every medium of every class.
pub fn tan_media_inventory() -> PositionalLayout {
    PositionalLayout::new(
        HKTAB,
        5,
        vec![
            DataElement::literal(TanMediaType::All.code()),
            DataElement::literal(TanMediaClass4::All.code()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identification_defaults() {
        let layout = identification(COUNTRY_CODE_DE, "12345678", "max:mustermann", None, None);
        assert_eq!(
            layout.elements().to_strings(),
            vec!["280:12345678", "max?:mustermann", "0", "1"]
        );
        assert_eq!(layout.version(), 2);
    }

    #[test]
    fn test_processing_preparation() {
        let layout = processing_preparation(Language::German, "fints+rs", "0.1");
        assert_eq!(
            layout.build(3).unwrap().to_wire(),
            "HKVVB:3:3+0+0+1+fints?+rs+0.1'"
        );
    }

    #[test]
    fn test_synchronisation_modes() {
        assert_eq!(
            synchronisation(SynchronisationMode::default()).elements().to_strings(),
            vec!["0"]
        );
        assert_eq!(
            synchronisation(SynchronisationMode::SignatureId).elements().to_strings(),
            vec!["2"]
        );
    }

    #[test]
    fn test_tan_media_inventory() {
        assert_eq!(tan_media_inventory().build(4).unwrap().to_wire(), "HKTAB:4:5+0+A'");
    }
}
