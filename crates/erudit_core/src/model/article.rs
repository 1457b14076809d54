/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An article abstract (`resume`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Abstract {
    pub lang: Option<String>,
    /// `typeresume`, e.g. `resume` or `abstract`.
    pub kind: Option<String>,
    pub content: String,
}

/// A bibliography entry (`refbiblio`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Reference {
    pub title: String,
    pub doi: Option<String>,
}

/// A general note (`notegen`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Notegen {
    /// `typenoteg`, e.g. `edito`.
    pub kind: Option<String>,
    /// One entry per paragraph.
    pub content: Vec<String>,
}
