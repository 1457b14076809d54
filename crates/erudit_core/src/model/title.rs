/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A title and its subtitle in one language, already rendered.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Title {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub lang: String,
    /// Subtitle text marked forced-uppercase. The mark only holds while
    /// `subtitle` still has this exact text.
    #[serde(skip)]
    forced_uppercase_subtitle: Option<String>,
}

const UPPERCASE_SPAN: &str = r#"<span class="majuscule">"#;

impl Title {
    pub fn new(title: Option<String>, subtitle: Option<String>, lang: impl Into<String>) -> Self {
        Self {
            title,
            subtitle,
            lang: lang.into(),
            forced_uppercase_subtitle: None,
        }
    }

    /// Mark the current subtitle as forced-uppercase, for subtitles
    /// rendered without markup.
    pub fn with_forced_uppercase(mut self, forced: bool) -> Self {
        if forced {
            self.forced_uppercase_subtitle = self.subtitle.clone();
        }
        self
    }

    /// Whether the subtitle keeps its casing as written: it opens with an
    /// uppercase span, or it was marked and has not changed since.
    pub fn subtitle_forced_uppercase(&self) -> bool {
        self.subtitle.as_deref().is_some_and(|subtitle| {
            subtitle.starts_with(UPPERCASE_SPAN)
                || self.forced_uppercase_subtitle.as_deref() == Some(subtitle)
        })
    }
}

impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.subtitle == other.subtitle && self.lang == other.lang
    }
}

/// Every title of an entity, split by language status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TitleSet {
    /// Title in the principal language.
    pub main: Title,
    /// Titles in the other declared languages, in declaration order.
    pub paral: Vec<Title>,
    /// Titles in undeclared languages, in document order.
    pub equivalent: Vec<Title>,
}

/// Section headings (`surtitre`) of an article at one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SectionTitles {
    pub main: Option<String>,
    /// Parallel headings by language.
    pub paral: IndexMap<String, String>,
}
