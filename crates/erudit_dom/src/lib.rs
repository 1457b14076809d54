/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Érudit DOM
//!
//! This crate holds the read-only tree that every Érudit accessor works on.
//! Documents are parsed with `roxmltree` and copied into an owned,
//! namespace-free [`Element`] tree, so a parsed [`Document`] can be kept
//! around, shared between threads, and queried with small ElementPath-like
//! expressions.
//!
//! Two renderers walk a subtree and flatten its inline markup
//! (`marquage`, `exposant`, `liensimple`, ...) either into a restricted
//! HTML subset or into whitespace-normalized plain text.
//!
//! # Example
//!
//! ```rust
//! use erudit_dom::{render, Document, RenderSettings};
//!
//! let doc = Document::parse(
//!     r#"<grtitre><titre>Un <marquage typemarq="italique">titre</marquage></titre></grtitre>"#,
//! )
//! .unwrap();
//! let titre = doc.find("titre");
//! let settings = RenderSettings::default();
//! assert_eq!(
//!     render::to_html(titre, &settings).as_deref(),
//!     Some("Un <em>titre</em>")
//! );
//! assert_eq!(render::to_text(titre, &settings).as_deref(), Some("Un titre"));
//! ```

pub mod document;
pub mod query;
pub mod render;

pub use document::{Document, Element, Node, ParseError};
pub use query::Query;
pub use render::{normalize_whitespace, FootnotePolicy, RenderSettings};
