/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Issue numbering, as read from `numero`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct NumberingInfo {
    pub volume: Option<String>,
    pub number: Option<String>,
    /// Second `nonumero`, shown in parentheses after the first.
    pub alt_number: Option<String>,
    /// `numero@typenumero` code (`hs`, `supp`, `index`...).
    pub number_type: Option<String>,
    pub publication_period: Option<String>,
}

/// Known issue type codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberType {
    /// `hs`
    SpecialIssue,
    /// `supp`
    Supplement,
    /// `index`
    Index,
    Other(String),
}

impl NumberType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "hs" => NumberType::SpecialIssue,
            "supp" => NumberType::Supplement,
            "index" => NumberType::Index,
            other => NumberType::Other(other.to_string()),
        }
    }
}
