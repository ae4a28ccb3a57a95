use crate::core::positional::COUNTRY_CODE_DE;
use crate::core::variant::{MAX_TAN_VERSION, MIN_TAN_VERSION};
use crate::domain::codes::Language;
use crate::utils::error::{Result, SegmentError};
use crate::utils::validation::{validate_country, validate_max_length, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PRODUCT_NAME: &str = "fints-segments";
pub const DEFAULT_PRODUCT_VERSION: &str = "0.1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FintsConfig {
    pub product: ProductConfig,
    pub dialog: Option<DialogConfig>,
    pub bank: Option<BankConfig>,
}

/// Product registration sent in HKVVB.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogConfig {
    pub language: Option<String>,
    pub country_code: Option<String>,
    pub tan_version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankConfig {
    pub blz: String,
}

impl Default for FintsConfig {
    fn default() -> Self {
        Self {
            product: ProductConfig {
                name: DEFAULT_PRODUCT_NAME.to_string(),
                version: DEFAULT_PRODUCT_VERSION.to_string(),
            },
            dialog: None,
            bank: None,
        }
    }
}

impl FintsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SegmentError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SegmentError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_max_length("product.name", &self.product.name, 25)?;
        validate_max_length("product.version", &self.product.version, 5)?;

        if let Some(dialog) = &self.dialog {
            if let Some(language) = &dialog.language {
                if Language::parse(language).is_none() {
                    return Err(SegmentError::ConfigError {
                        field: "dialog.language".to_string(),
                        message: format!("Unknown language '{}'. Valid: de, en, fr", language),
                    });
                }
            }
            if let Some(country) = &dialog.country_code {
                validate_country("dialog.country_code", country)?;
            }
            if let Some(version) = dialog.tan_version {
                validate_range("dialog.tan_version", version, MIN_TAN_VERSION, MAX_TAN_VERSION)?;
            }
        }

        Ok(())
    }

    pub fn product_name(&self) -> &str {
        &self.product.name
    }

    pub fn product_version(&self) -> &str {
        &self.product.version
    }

    /// Falls back to German when unset or unknown.
    pub fn language(&self) -> Language {
        self.dialog
            .as_ref()
            .and_then(|d| d.language.as_deref())
            .and_then(Language::parse)
            .unwrap_or_default()
    }

    pub fn country_code(&self) -> &str {
        self.dialog
            .as_ref()
            .and_then(|d| d.country_code.as_deref())
            .unwrap_or(COUNTRY_CODE_DE)
    }

    /// Highest supported HKTAN version unless configured.
    pub fn tan_version(&self) -> u32 {
        self.dialog
            .as_ref()
            .and_then(|d| d.tan_version)
            .unwrap_or(MAX_TAN_VERSION)
    }

    pub fn blz(&self) -> Option<&str> {
        self.bank.as_ref().map(|b| b.blz.as_str())
    }
}

impl Validate for FintsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
