/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::person::Person;
use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A theme name in a parallel language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ThemeParal {
    pub name: Option<String>,
    pub subname: Option<String>,
    pub lang: String,
}

/// An issue theme (`grtheme`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Theme {
    pub name: Option<String>,
    pub subname: Option<String>,
    pub lang: String,
    /// Editors whose `idrefs` name this theme.
    pub redacteurchef: Vec<Person>,
    pub paral: IndexMap<String, ThemeParal>,
}
