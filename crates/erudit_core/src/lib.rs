/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Shared types for the Érudit accessors: the records returned by the
//! getters, the message catalogs used for localized phrasing, the
//! configuration that selects a locale and an output mode, and the error
//! taxonomy.

pub mod error;
pub mod locale;
pub mod model;
pub mod options;

pub use error::{Error, Result};
pub use locale::Locale;
pub use model::*;
pub use options::{Config, RenderMode, RenderOptions};
