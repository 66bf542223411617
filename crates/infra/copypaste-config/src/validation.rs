//! Advisory validation for `CopyPasteConfig`.
//!
//! Validation only produces warnings; the config stays usable.

use crate::prompt::TEXT_PLACEHOLDER;
use crate::types::CopyPasteConfig;

/// An advisory warning about a configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// JSON path to the problematic config field.
    pub path: &'static str,
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a configuration and return advisory warnings.
pub fn validate(cfg: &CopyPasteConfig) -> Vec<AdvisoryWarning> {
    let mut warnings = vec![];

    let url = &cfg.services.gemini.base_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        warnings.push(AdvisoryWarning {
            code: "services.gemini.base_url.invalid",
            path: "services.gemini.base_url",
            message: format!("Expected an http(s) URL, got: '{url}'"),
        });
    }

    if cfg.models.default_model.trim().is_empty() {
        warnings.push(AdvisoryWarning {
            code: "models.default_model.empty",
            path: "models.default_model",
            message: "Value cannot be empty".into(),
        });
    }

    if !cfg.prompt.template.contains(TEXT_PLACEHOLDER) {
        warnings.push(AdvisoryWarning {
            code: "prompt.template.missing_placeholder",
            path: "prompt.template",
            message: format!(
                "Template has no {TEXT_PLACEHOLDER} placeholder; the cleaned text will be appended"
            ),
        });
    }

    if let Some(phrase) = &cfg.scrubber.phrase
        && !phrase.chars().any(|c| c.is_alphanumeric() || c == '_')
    {
        warnings.push(AdvisoryWarning {
            code: "scrubber.phrase.no_words",
            path: "scrubber.phrase",
            message: "Phrase has no words; scrubbing will leave text unchanged".into(),
        });
    }

    if cfg.secrets.path.trim().is_empty() {
        warnings.push(AdvisoryWarning {
            code: "secrets.path.empty",
            path: "secrets.path",
            message: "Value cannot be empty".into(),
        });
    }

    if !VALID_LEVELS.contains(&cfg.logging.level.to_lowercase().as_str()) {
        warnings.push(AdvisoryWarning {
            code: "logging.level.invalid",
            path: "logging.level",
            message: format!(
                "Unknown log level '{}'. Expected one of: {}",
                cfg.logging.level,
                VALID_LEVELS.join(", ")
            ),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(cfg: &CopyPasteConfig) -> Vec<&'static str> {
        validate(cfg).into_iter().map(|w| w.code).collect()
    }

    #[test]
    fn test_default_config_has_no_warnings() {
        let warnings = validate(&CopyPasteConfig::default());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn test_invalid_url_warns() {
        let mut config = CopyPasteConfig::default();
        config.services.gemini.base_url = "generativelanguage.googleapis.com".into();
        assert_eq!(codes(&config), ["services.gemini.base_url.invalid"]);
    }

    #[test]
    fn test_template_without_placeholder_warns() {
        let mut config = CopyPasteConfig::default();
        config.prompt.template = "Answer briefly.".into();
        assert_eq!(codes(&config), ["prompt.template.missing_placeholder"]);
    }

    #[test]
    fn test_empty_model_and_bad_level_warn() {
        let mut config = CopyPasteConfig::default();
        config.models.default_model = "  ".into();
        config.logging.level = "verbose".into();
        assert_eq!(
            codes(&config),
            ["models.default_model.empty", "logging.level.invalid"]
        );
    }

    #[test]
    fn test_punctuation_phrase_warns() {
        let mut config = CopyPasteConfig::default();
        config.scrubber.phrase = Some("-- !!".into());
        assert_eq!(codes(&config), ["scrubber.phrase.no_words"]);

        config.scrubber.phrase = Some("honor code".into());
        assert!(codes(&config).is_empty());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = CopyPasteConfig::default();
        config.logging.level = "DEBUG".into();
        assert!(codes(&config).is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = AdvisoryWarning {
            code: "test.code",
            path: "test.path",
            message: "Test message".into(),
        };
        assert_eq!(warning.to_string(), "[test.code] test.path: Test message");
    }
}
