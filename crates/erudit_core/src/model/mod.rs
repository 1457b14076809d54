/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Records returned by the accessors.
//!
//! They are plain values, rebuilt on every call.

pub mod article;
pub mod copyright;
pub mod numbering;
pub mod person;
pub mod theme;
pub mod title;

pub use article::{Abstract, Notegen, Reference};
pub use copyright::{CopyrightNotice, Copyrights};
pub use numbering::{NumberType, NumberingInfo};
pub use person::{EditorKind, Person};
pub use theme::{Theme, ThemeParal};
pub use title::{SectionTitles, Title, TitleSet};
