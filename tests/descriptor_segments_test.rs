use anyhow::Result;
use fints_segments::core::descriptor::{serialize, FieldValue};
use fints_segments::core::segments::{self, HKIDN2, HKVVB3};
use fints_segments::domain::codes::{Language, SystemIdStatus};
use fints_segments::{DescriptorLayout, FintsConfig, LayoutStrategy, SegmentError};

fn preparation_values() -> Vec<Option<FieldValue>> {
    vec![
        Some(0u32.into()),
        Some(0u32.into()),
        Some(FieldValue::code(Language::English.code())),
        Some("my-product".into()),
        Some("1.0".into()),
    ]
}

/// A required field left unset is reported by name.
#[test]
fn test_missing_required_field_is_named() {
    let mut values = preparation_values();
    values[3] = None;

    let err = serialize(HKVVB3, &values).unwrap_err();
    assert!(matches!(
        err,
        SegmentError::MissingFieldError { ref field } if field == "product_name"
    ));
    assert_eq!(err.field(), Some("product_name"));
}

/// The same request with the field set keeps declaration order.
#[test]
fn test_valid_request_keeps_declaration_order() -> Result<()> {
    let vector = serialize(HKVVB3, &preparation_values())?;
    assert_eq!(vector.to_strings(), vec!["0", "0", "2", "my-product", "1.0"]);
    Ok(())
}

#[test]
fn test_identification_group_and_escaping() -> Result<()> {
    let layout = DescriptorLayout::new(
        "HKIDN",
        2,
        HKIDN2,
        vec![
            Some(FieldValue::Group(vec![
                Some(280u32.into()),
                Some("10020030".into()),
            ])),
            Some("kunde'42".into()),
            Some("0".into()),
            Some(FieldValue::code(SystemIdStatus::IdNecessary.code())),
        ],
    );
    assert_eq!(layout.build(2)?.to_wire(), "HKIDN:2:2+280:10020030+kunde?'42+0+1'");
    Ok(())
}

#[test]
fn test_unknown_code_is_rejected() {
    let mut values = preparation_values();
    values[2] = Some("9".into());
    let err = serialize(HKVVB3, &values).unwrap_err();
    assert!(matches!(
        err,
        SegmentError::FieldValidationError { ref field, .. } if field == "language"
    ));
}

#[test]
fn test_product_version_length() {
    let mut values = preparation_values();
    values[4] = Some("1.0.0-beta".into());
    let err = serialize(HKVVB3, &values).unwrap_err();
    assert_eq!(err.field(), Some("product_version"));
}

#[test]
fn test_configured_segments() -> Result<()> {
    let config = FintsConfig::from_toml_str(
        r#"
[product]
name = "acme:bank"
version = "2.1"

[dialog]
language = "fr"
country_code = "040"
tan_version = 4

[bank]
blz = "12345"
"#,
    )?;

    let hkvvb = segments::processing_preparation(&config, 12, 3).build(3)?;
    assert_eq!(hkvvb.to_wire(), "HKVVB:3:3+12+3+3+acme?:bank+2.1'");

    let hkidn = segments::identification(&config, "user", "0", SystemIdStatus::IdUnnecessary)?
        .build(2)?;
    assert_eq!(hkidn.to_wire(), "HKIDN:2:2+040:12345+user+0+0'");

    let hktan = segments::tan_process(&config, "4", None, Some("M1"))?.build(4)?;
    assert_eq!(hktan.to_wire(), "HKTAN:4:4+4+++++++++M1'");
    Ok(())
}
