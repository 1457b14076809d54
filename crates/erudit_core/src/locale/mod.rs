/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Message catalogs.
//!
//! Every localizable word the formatters emit (numbering words, month and
//! season names, the conjunction between names...) is written in French
//! in the code and looked up by `(context, msgid)`. A catalog with no
//! entry for a message hands the msgid back unchanged, so the default,
//! empty catalog produces French output.

pub mod embedded;

use crate::error::{Error, Result};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context used by [`Locale::gettext`].
pub const DEFAULT_CONTEXT: &str = "default";

/// The locale used when nothing else is requested.
pub const DEFAULT_LOCALE: &str = "fr";

fn default_true() -> bool {
    true
}

/// A message catalog for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Locale {
    /// The locale identifier (e.g. "fr", "en").
    pub locale: String,
    /// Whether words that do not start a sentence are written in lowercase
    /// ("Volume 32, numéro 2" rather than "Volume 32, Numéro 2").
    #[serde(default = "default_true")]
    pub lowercase_mid_sentence: bool,
    /// Translations keyed by context, then by French msgid.
    #[serde(default)]
    pub messages: HashMap<String, HashMap<String, String>>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            lowercase_mid_sentence: true,
            messages: HashMap::new(),
        }
    }
}

impl Locale {
    /// Load a locale from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::Locale(format!("failed to parse locale YAML: {e}")))
    }

    fn from_yaml_bytes(bytes: &[u8]) -> Result<Self> {
        let yaml = std::str::from_utf8(bytes)
            .map_err(|e| Error::Locale(format!("locale file is not UTF-8: {e}")))?;
        Self::from_yaml_str(yaml)
    }

    /// Load one of the bundled catalogs by identifier ("en", "fr-CA"...).
    ///
    /// Falls back to the base language ("fr" for "fr-CA"), then to the
    /// French catalog.
    pub fn load(locale_id: &str) -> Result<Self> {
        if let Some(bytes) = embedded::get_locale_bytes(locale_id) {
            return Self::from_yaml_bytes(bytes);
        }

        let base = base_language(locale_id);
        if base != locale_id {
            if let Some(bytes) = embedded::get_locale_bytes(base) {
                tracing::debug!(requested = locale_id, using = base, "locale fallback");
                return Self::from_yaml_bytes(bytes);
            }
        }

        tracing::debug!(
            requested = locale_id,
            using = DEFAULT_LOCALE,
            "unknown locale"
        );
        match embedded::get_locale_bytes(DEFAULT_LOCALE) {
            Some(bytes) => Self::from_yaml_bytes(bytes),
            None => Ok(Self::default()),
        }
    }

    /// The base language of this locale ("fr" for "fr-CA").
    pub fn language(&self) -> &str {
        base_language(&self.locale)
    }

    /// Translate `msgid` in `context`, or return it unchanged.
    pub fn pgettext<'a>(&'a self, context: &str, msgid: &'a str) -> &'a str {
        self.messages
            .get(context)
            .and_then(|messages| messages.get(msgid))
            .map(String::as_str)
            .unwrap_or(msgid)
    }

    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.pgettext(DEFAULT_CONTEXT, msgid)
    }

    /// The conjunction placed before the last of several names.
    pub fn and_term(&self) -> &str {
        self.gettext("et")
    }

    /// The abbreviation standing for the remaining authors.
    pub fn et_al(&self) -> &str {
        self.gettext("et al")
    }

    /// The word introducing a pseudonym.
    pub fn alias(&self) -> &str {
        self.gettext("alias")
    }

    /// Prepare a word for use inside a sentence.
    pub fn mid_sentence(&self, s: &str) -> String {
        if self.lowercase_mid_sentence {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    }
}

/// The part of a language tag before the first `-` or `_`.
pub fn base_language(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// True for "fr" and any regional French ("fr-CA").
pub fn is_french(tag: &str) -> bool {
    base_language(tag).eq_ignore_ascii_case("fr")
}
