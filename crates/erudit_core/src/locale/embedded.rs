/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Locale catalogs baked in at compile time.

/// Raw YAML bytes for a bundled catalog.
///
/// Returns `None` for locales not bundled with the library.
pub fn get_locale_bytes(id: &str) -> Option<&'static [u8]> {
    match id {
        "fr" => Some(include_bytes!("../../../../locales/fr.yaml")),
        "en" => Some(include_bytes!("../../../../locales/en.yaml")),
        _ => None,
    }
}

/// All bundled locale identifiers.
pub const EMBEDDED_LOCALE_IDS: &[&str] = &["fr", "en"];
