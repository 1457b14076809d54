/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One `droitsauteur` entry: either a statement or a licence link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CopyrightNotice {
    Text {
        text: String,
    },
    Link {
        href: String,
        /// Badge image of the licence.
        img: Option<String>,
    },
}

/// Copyright declaration in a given language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Copyrights {
    pub label: Option<String>,
    pub names: Vec<String>,
    pub year: Option<String>,
}
