/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        s.to_string()
    }

    fn push(&self, acc: &mut Self::Output, item: Self::Output) {
        acc.push_str(&item);
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn emph(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn small(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn span(&self, _class: &str, content: Self::Output) -> Self::Output {
        content
    }

    fn sup(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn sub(&self, content: Self::Output) -> Self::Output {
        content
    }

    fn link(&self, _href: &str, content: Self::Output) -> Self::Output {
        // Only the link text is kept.
        content
    }

    // Blocks are padded so adjacent paragraphs do not run together;
    // whitespace normalization collapses the padding afterwards.
    fn paragraph(&self, _class: &str, content: Self::Output) -> Self::Output {
        format!(" {content} ")
    }

    fn list(&self, _ordered: bool, items: Self::Output) -> Self::Output {
        format!(" {items} ")
    }

    fn item(&self, content: Self::Output) -> Self::Output {
        format!(" {content} ")
    }

    fn blockquote(&self, content: Self::Output) -> Self::Output {
        format!(" {content} ")
    }
}
