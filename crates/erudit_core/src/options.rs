/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Configuration and the rendering context handed to every formatter.

use crate::error::{Error, Result};
use crate::locale::{Locale, DEFAULT_LOCALE};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Output mode for rendered strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Markup removed.
    Plain,
    /// Markup converted to the restricted HTML subset.
    #[default]
    Html,
}

/// User-facing configuration, usually read from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Catalog used for localized words.
    pub locale: String,
    pub format: RenderMode,
    /// Parallel titles in undeclared languages are kept apart as
    /// equivalents. When false every parallel title counts as parallel.
    pub strict_language_check: bool,
    /// "Vol." and "N°" instead of "Volume" and "Numéro".
    pub abbreviated_numbering: bool,
    /// Language given to a main title when the entity declares none.
    pub fallback_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            format: RenderMode::default(),
            strict_language_check: true,
            abbreviated_numbering: false,
            fallback_language: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(format!("failed to parse config: {e}")))
    }

    /// Load the catalog named by `locale`.
    pub fn load_locale(&self) -> Result<Locale> {
        Locale::load(&self.locale)
    }
}

static DEFAULT_LOCALE_CATALOG: LazyLock<Locale> = LazyLock::new(Locale::default);

/// Rendering context passed explicitly to the formatters.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub locale: &'a Locale,
    pub format: RenderMode,
    pub strict_language_check: bool,
    pub fallback_language: &'a str,
}

impl<'a> RenderOptions<'a> {
    pub fn new(locale: &'a Locale, format: RenderMode) -> Self {
        Self {
            locale,
            format,
            strict_language_check: true,
            fallback_language: DEFAULT_LOCALE,
        }
    }

    pub fn from_config(config: &'a Config, locale: &'a Locale) -> Self {
        Self {
            locale,
            format: config.format,
            strict_language_check: config.strict_language_check,
            fallback_language: &config.fallback_language,
        }
    }

    /// Same options with another output mode.
    pub fn with_format(self, format: RenderMode) -> Self {
        Self { format, ..self }
    }

    pub fn with_strict_language_check(self, strict: bool) -> Self {
        Self {
            strict_language_check: strict,
            ..self
        }
    }

    pub fn html(&self) -> bool {
        self.format == RenderMode::Html
    }
}

impl RenderOptions<'static> {
    /// French, plain text.
    pub fn plain() -> Self {
        Self::new(&DEFAULT_LOCALE_CATALOG, RenderMode::Plain)
    }

    /// French, HTML.
    pub fn html_default() -> Self {
        Self::new(&DEFAULT_LOCALE_CATALOG, RenderMode::Html)
    }
}

impl Default for RenderOptions<'static> {
    fn default() -> Self {
        Self::html_default()
    }
}
