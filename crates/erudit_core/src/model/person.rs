/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Editor-in-chief kind (`redacteurchef@typerc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum EditorKind {
    Regulier,
    Invite,
}

impl EditorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorKind::Regulier => "regulier",
            EditorKind::Invite => "invite",
        }
    }
}

impl std::str::FromStr for EditorKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regulier" => Ok(EditorKind::Regulier),
            "invite" => Ok(EditorKind::Invite),
            _ => Err(()),
        }
    }
}

/// A person or an organization named in a document.
///
/// A person has name parts; an organization has `organization` set and,
/// optionally, `members`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub othername: Option<String>,
    /// All suffixes, joined with ", ".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affiliations: Vec<String>,
    /// Function by language.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub role: IndexMap<String, String>,
    /// Name published under, when it differs from the main name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<Box<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typerc: Option<EditorKind>,
    /// Theme ids this editor is attached to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,
}

impl Person {
    pub fn is_organization(&self) -> bool {
        self.organization.is_some()
    }

    /// True when there is no name and no organization to show.
    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.othername.is_none()
            && self.organization.is_none()
            && self.pseudo.as_ref().map_or(true, |p| p.is_empty())
    }
}
