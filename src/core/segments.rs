//! Descriptor-based authentication segments.
//!
//! Field names and limits follow the FinTS formals and the PIN/TAN security
//! procedure document.

use crate::config::toml_config::FintsConfig;
use crate::core::descriptor::{DescriptorLayout, FieldDescriptor, FieldType, FieldValue};
use crate::core::variant::TanVariant;
use crate::domain::codes::{
    Language, SynchronisationMode, SystemIdStatus, TanMediaClass3, TanMediaClass4, TanMediaType,
};
use crate::utils::error::{Result, SegmentError};

/// Identifikation.
pub const HKIDN: &str = "HKIDN";
/// Verarbeitungsvorbereitung.
pub const HKVVB: &str = "HKVVB";
/// Synchronisierung.
pub const HKSYN: &str = "HKSYN";
/// Zwei-Schritt-TAN-Einreichung.
pub const HKTAN: &str = "HKTAN";
/// TAN-Generator/Liste anzeigen Bestand.
pub const HKTAB: &str = "HKTAB";

/// Kreditinstitutskennung.
pub const BANK_IDENTIFIER: &[FieldDescriptor] = &[
    FieldDescriptor::element("country_identifier", FieldType::Country),
    FieldDescriptor::element("bank_code", FieldType::Alphanumeric).max_length(30),
];

pub const HKIDN2: &[FieldDescriptor] = &[
    FieldDescriptor::group("bank_identifier", BANK_IDENTIFIER),
    FieldDescriptor::element("customer_id", FieldType::Identifier),
    FieldDescriptor::element("system_id", FieldType::Identifier),
    FieldDescriptor::element("system_id_status", FieldType::Code)
        .max_length(1)
        .domain(SystemIdStatus::CODES),
];

pub const HKVVB3: &[FieldDescriptor] = &[
    FieldDescriptor::element("bpd_version", FieldType::Numeric).max_length(3),
    FieldDescriptor::element("upd_version", FieldType::Numeric).max_length(3),
    FieldDescriptor::element("language", FieldType::Code)
        .max_length(3)
        .domain(Language::CODES),
    FieldDescriptor::element("product_name", FieldType::Alphanumeric).max_length(25),
    FieldDescriptor::element("product_version", FieldType::Alphanumeric).max_length(5),
];

pub const HKSYN3: &[FieldDescriptor] = &[FieldDescriptor::element(
    "synchronisation_mode",
    FieldType::Code,
)
.domain(SynchronisationMode::CODES)];

pub const HKTAB4: &[FieldDescriptor] = &[
    FieldDescriptor::element("tan_media_type", FieldType::Code).domain(TanMediaType::CODES),
    FieldDescriptor::element("tan_media_class", FieldType::Code).domain(TanMediaClass3::CODES),
];

pub const HKTAB5: &[FieldDescriptor] = &[
    FieldDescriptor::element("tan_media_type", FieldType::Code).domain(TanMediaType::CODES),
    FieldDescriptor::element("tan_media_class", FieldType::Code).domain(TanMediaClass4::CODES),
];

/// HKIDN version 2 for the configured bank. Fails when no `[bank] blz` is set.
pub fn identification(
    config: &FintsConfig,
    customer_id: &str,
    system_id: &str,
    status: SystemIdStatus,
) -> Result<DescriptorLayout> {
    let blz = config.blz().ok_or_else(|| SegmentError::MissingFieldError {
        field: "bank.blz".to_string(),
    })?;

    Ok(DescriptorLayout::new(
        HKIDN,
        2,
        HKIDN2,
        vec![
            Some(FieldValue::Group(vec![
                Some(FieldValue::text(config.country_code())),
                Some(FieldValue::text(blz)),
            ])),
            Some(FieldValue::text(customer_id)),
            Some(FieldValue::text(system_id)),
            Some(FieldValue::code(status.code())),
        ],
    ))
}

/// HKTAN in the configured version.
pub fn tan_process(
    config: &FintsConfig,
    process: &str,
    aref: Option<&str>,
    medium: Option<&str>,
) -> Result<TanVariant> {
    TanVariant::new(process, config.tan_version(), aref, medium)
}

/// HKVVB version 3 announcing the configured product.
pub fn processing_preparation(
    config: &FintsConfig,
    bpd_version: u32,
    upd_version: u32,
) -> DescriptorLayout {
    DescriptorLayout::new(
        HKVVB,
        3,
        HKVVB3,
        vec![
            Some(bpd_version.into()),
            Some(upd_version.into()),
            Some(FieldValue::code(config.language().code())),
            Some(FieldValue::text(config.product_name())),
            Some(FieldValue::text(config.product_version())),
        ],
    )
}

pub fn synchronisation(mode: SynchronisationMode) -> DescriptorLayout {
    DescriptorLayout::new(HKSYN, 3, HKSYN3, vec![Some(FieldValue::code(mode.code()))])
}

pub fn tan_media_v4(media_type: TanMediaType, media_class: TanMediaClass3) -> DescriptorLayout {
    DescriptorLayout::new(
        HKTAB,
        4,
        HKTAB4,
        vec![
            Some(FieldValue::code(media_type.code())),
            Some(FieldValue::code(media_class.code())),
        ],
    )
}

pub fn tan_media_v5(media_type: TanMediaType, media_class: TanMediaClass4) -> DescriptorLayout {
    DescriptorLayout::new(
        HKTAB,
        5,
        HKTAB5,
        vec![
            Some(FieldValue::code(media_type.code())),
            Some(FieldValue::code(media_class.code())),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::BankConfig;
    use crate::domain::ports::LayoutStrategy;

    fn bank_config() -> FintsConfig {
        FintsConfig {
            bank: Some(BankConfig {
                blz: "12345678".to_string(),
            }),
            ..FintsConfig::default()
        }
    }

    #[test]
    fn test_identification_descriptor_layout() {
        let segment = identification(&bank_config(), "user:1", "0", SystemIdStatus::IdNecessary)
            .unwrap()
            .build(2)
            .unwrap();
        assert_eq!(segment.to_wire(), "HKIDN:2:2+280:12345678+user?:1+0+1'");
    }

    #[test]
    fn test_identification_requires_configured_blz() {
        let err = identification(&FintsConfig::default(), "user", "0", SystemIdStatus::IdNecessary)
            .unwrap_err();
        assert!(matches!(
            err,
            SegmentError::MissingFieldError { ref field } if field == "bank.blz"
        ));
    }

    #[test]
    fn test_tan_process_uses_configured_version() {
        let config = FintsConfig::from_toml_str(
            "[product]\nname = \"x\"\nversion = \"1\"\n[dialog]\ntan_version = 5\n",
        )
        .unwrap();
        let segment = tan_process(&config, "2", Some("REF"), None)
            .unwrap()
            .build(4)
            .unwrap();
        assert_eq!(segment.to_wire(), "HKTAN:4:5+2++++REF++N'");

        let default_version = tan_process(&FintsConfig::default(), "4", None, Some("M1")).unwrap();
        assert_eq!(default_version.version(), 6);
    }

    #[test]
    fn test_processing_preparation_uses_config() {
        let config = FintsConfig::default();
        let vector = processing_preparation(&config, 0, 78).layout().unwrap();
        assert_eq!(
            vector.to_strings(),
            vec!["0", "78", "1", config.product_name(), config.product_version()]
        );
    }

    #[test]
    fn test_bpd_version_limited_to_three_digits() {
        let config = FintsConfig::default();
        let err = processing_preparation(&config, 1000, 0).layout().unwrap_err();
        assert!(matches!(
            err,
            SegmentError::FieldValidationError { ref field, .. } if field == "bpd_version"
        ));
    }

    #[test]
    fn test_tan_media_versions() {
        let v4 = tan_media_v4(TanMediaType::Active, TanMediaClass3::Generator)
            .build(5)
            .unwrap();
        assert_eq!(v4.to_wire(), "HKTAB:5:4+1+G'");
        let v5 = tan_media_v5(TanMediaType::All, TanMediaClass4::Bilateral)
            .build(5)
            .unwrap();
        assert_eq!(v5.to_wire(), "HKTAB:5:5+0+B'");
    }

    #[test]
    fn test_synchronisation_descriptor() {
        let vector = synchronisation(SynchronisationMode::LastMessageNumber)
            .layout()
            .unwrap();
        assert_eq!(vector.to_strings(), vec!["1"]);
    }
}
