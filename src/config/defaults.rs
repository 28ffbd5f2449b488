//! Named configuration presets.

use super::types::{AppConfig, MergeConfig, OutputConfig, ValidationConfig};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Merge only; validation is opt-in
    Default,
    /// Validate every merge and fail on any issue
    Strict,
    /// Strict, plus the NTIA minimum elements
    Ntia,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Ntia => "ntia",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "ntia" | "ntia-minimum" => Some(Self::Ntia),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Merge fragments without validating the result",
            Self::Strict => "Validate every merged document and fail on any issue",
            Self::Ntia => "Strict validation plus NTIA minimum elements for each package",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Ntia]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Ntia => Self::ntia_preset(),
        }
    }

    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            merge: MergeConfig {
                validate: true,
                ..MergeConfig::default()
            },
            validation: ValidationConfig {
                ntia: false,
                fail_on_issues: true,
            },
            output: OutputConfig::default(),
        }
    }

    #[must_use]
    pub fn ntia_preset() -> Self {
        let mut config = Self::strict_preset();
        config.validation.ntia = true;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("NTIA-Minimum"), Some(ConfigPreset::Ntia));
        assert_eq!(ConfigPreset::from_name("lenient"), None);
    }

    #[test]
    fn test_strict_preset_validates_merges() {
        let config = AppConfig::from_preset(ConfigPreset::Strict);
        assert!(config.merge.validate);
        assert!(!config.validation.ntia);
    }

    #[test]
    fn test_ntia_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Ntia);
        assert!(config.merge.validate);
        assert!(config.validation.ntia);
        assert!(config.validation.fail_on_issues);
    }

    #[test]
    fn test_default_preset_is_default() {
        assert_eq!(AppConfig::from_preset(ConfigPreset::Default), AppConfig::default());
    }
}
