/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Accessors for Érudit documents.
//!
//! [`Article`], [`Publication`] (an issue summary) and [`Journal`] wrap a
//! parsed [`erudit_dom::Document`] and expose typed getters. Getters that
//! produce display strings take a [`RenderOptions`], which carries the
//! message catalog, the output mode (plain text or HTML) and the
//! language rules.
//!
//! The formatting engines are usable on their own:
//!
//! - [`titles`]: multilingual title extraction and formatting
//! - [`numbering`]: issue numbering and publication periods
//! - [`persons`]: person extraction, display names and citation styles
//!
//! ```rust
//! use erudit_core::{RenderOptions, Title};
//! use erudit_objects::titles::format_title;
//!
//! let title = Title::new(Some("Titre".into()), Some("Sous-titre".into()), "fr");
//! assert_eq!(
//!     format_title(&title, true).as_deref(),
//!     Some("Titre\u{a0}: sous-titre")
//! );
//! # let _ = RenderOptions::plain();
//! ```

pub mod article;
pub mod facets;
pub mod journal;
pub mod numbering;
pub mod persons;
pub mod publication;
pub mod titles;

pub use article::Article;
pub use erudit_core::{Error, RenderMode, RenderOptions, Result};
pub use facets::{Copyrighted, Periodical};
pub use journal::Journal;
pub use numbering::NumberingOptions;
pub use persons::{CitationStyle, NameParts};
pub use publication::Publication;
pub use titles::{TitleElements, TitleSetOptions};

use erudit_dom::{render, Element, RenderSettings};

/// Render an element in the mode selected by `opts`.
pub(crate) fn render_element(
    element: Option<&Element>,
    settings: &RenderSettings,
    opts: &RenderOptions,
) -> Option<String> {
    if opts.html() {
        render::to_html(element, settings)
    } else {
        render::to_text(element, settings)
    }
}
