use crate::utils::error::{Result, SegmentError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: String) -> SegmentError {
    SegmentError::FieldValidationError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// Length is counted in characters of the unescaped value.
pub fn validate_max_length(field_name: &str, value: &str, max_length: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max_length {
        return Err(invalid(
            field_name,
            value,
            format!("Length {} exceeds maximum of {}", length, max_length),
        ));
    }
    Ok(())
}

/// Digits only, no leading zeros except for `0` itself.
pub fn validate_numeric(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(field_name, value, "Value must be numeric".to_string()));
    }
    if value.len() > 1 && value.starts_with('0') {
        return Err(invalid(
            field_name,
            value,
            "Numeric values carry no leading zeros".to_string(),
        ));
    }
    Ok(())
}

/// ISO 3166 numeric country code, always three digits.
pub fn validate_country(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 3 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(
            field_name,
            value,
            "Country code must be exactly three digits".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_code(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Unknown code. Valid codes: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SegmentError::MissingFieldError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("product_version", "0.1", 5).is_ok());
        assert!(validate_max_length("product_version", "12345", 5).is_ok());
        assert!(validate_max_length("product_version", "123456", 5).is_err());
        // Umlauts count as one character each.
        assert!(validate_max_length("customer_id", "üüü", 3).is_ok());
    }

    #[test]
    fn test_validate_numeric() {
        assert!(validate_numeric("bpd_version", "0").is_ok());
        assert!(validate_numeric("bpd_version", "78").is_ok());
        assert!(validate_numeric("bpd_version", "078").is_err());
        assert!(validate_numeric("bpd_version", "7a").is_err());
        assert!(validate_numeric("bpd_version", "").is_err());
    }

    #[test]
    fn test_validate_country() {
        assert!(validate_country("country", "280").is_ok());
        assert!(validate_country("country", "28").is_err());
        assert!(validate_country("country", "DE1").is_err());
    }

    #[test]
    fn test_validate_code_names_field() {
        let err = validate_code("tan_media_class", "X", &["A", "L"]).unwrap_err();
        assert_eq!(err.field(), Some("tan_media_class"));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        assert_eq!(*validate_required_field("aref", &present).unwrap(), 3);
        let absent: Option<u8> = None;
        assert!(matches!(
            validate_required_field("aref", &absent),
            Err(SegmentError::MissingFieldError { .. })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("tan_version", 6, 3, 6).is_ok());
        assert!(validate_range("tan_version", 2, 3, 6).is_err());
    }
}
