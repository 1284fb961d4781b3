//! Internationalization module
//!
//! User-facing texts for popups, form errors and buttons. Catalogs are
//! embedded TOML files keyed by dotted paths, with fallback to the
//! default language for missing entries.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::I18nConfig;
use crate::utils::errors::Result;

static EN: &str = include_str!("locales/en.toml");
static RU: &str = include_str!("locales/ru.toml");

/// Translation parameters for message placeholders
pub type TranslationParams = HashMap<String, String>;

/// Message catalog with per-language lookup
#[derive(Debug, Clone)]
pub struct I18n {
    default_language: String,
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl I18n {
    /// Build the catalog set for the configured languages
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let mut catalogs = HashMap::new();

        for language in &config.supported_languages {
            let source = match language.as_str() {
                "en" => EN,
                "ru" => RU,
                other => {
                    warn!(language = other, "No embedded catalog for language");
                    continue;
                }
            };

            let value: toml::Value = toml::from_str(source)?;
            let mut entries = HashMap::new();
            flatten("", &value, &mut entries);
            debug!(language = %language, entries = entries.len(), "Catalog loaded");
            catalogs.insert(language.clone(), entries);
        }

        Ok(Self {
            default_language: config.default_language.clone(),
            catalogs,
        })
    }

    /// Look up a message by dotted key.
    ///
    /// Falls back to the default language, then to the key itself, and
    /// substitutes `{name}` placeholders from `params`.
    pub fn t(&self, key: &str, language: &str, params: Option<&TranslationParams>) -> String {
        let text = self
            .lookup(key, language)
            .or_else(|| self.lookup(key, &self.default_language))
            .unwrap_or_else(|| {
                warn!(key = key, language = language, "Missing translation");
                key.to_string()
            });

        match params {
            Some(params) => {
                let mut text = text;
                for (name, value) in params {
                    text = text.replace(&format!("{{{}}}", name), value);
                }
                text
            }
            None => text,
        }
    }

    /// Pick the language to use for a requested code
    pub fn resolve_language(&self, requested: Option<&str>) -> String {
        match requested {
            Some(code) if self.catalogs.contains_key(code) => code.to_string(),
            _ => self.default_language.clone(),
        }
    }

    fn lookup(&self, key: &str, language: &str) -> Option<String> {
        self.catalogs
            .get(language)
            .and_then(|catalog| catalog.get(key))
            .cloned()
    }
}

fn flatten(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, nested, out);
            }
        }
        toml::Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
