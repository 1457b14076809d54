/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors returned by the accessors.
///
/// Only a few situations are errors: a required title group that is not
/// there, an argument outside the values an operation accepts, and a
/// numeric field holding something else. Any other absence is a `None`
/// or an empty collection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required element <{element}> is missing")]
    MissingRequiredElement { element: String },

    #[error("invalid value for {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("<{field}> is not a number: {value:?}")]
    MalformedNumericField { field: String, value: String },

    #[error(transparent)]
    Parse(#[from] erudit_dom::ParseError),

    #[error("locale error: {0}")]
    Locale(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing(element: impl Into<String>) -> Self {
        Error::MissingRequiredElement {
            element: element.into(),
        }
    }

    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

/// Parse the trimmed text of a numeric field.
pub fn parse_numeric<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::MalformedNumericField {
            field: field.to_string(),
            value: value.to_string(),
        })
}
