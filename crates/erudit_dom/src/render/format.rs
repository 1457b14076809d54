/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for the markup renderers.

/// Defines how the inline markup vocabulary is written out.
///
/// The walk in [`super`] decides *what* each source element means
/// (emphasis, a link, a list item...); implementations decide how that
/// meaning is spelled in the target format.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output: Default;

    /// Convert raw character data, escaping it as the format requires.
    fn text(&self, s: &str) -> Self::Output;

    /// Append `item` to `acc`.
    fn push(&self, acc: &mut Self::Output, item: Self::Output);

    /// Convert the intermediate output into the final string.
    fn finish(&self, output: Self::Output) -> String;

    /// Render content with emphasis (italics).
    fn emph(&self, content: Self::Output) -> Self::Output;

    /// Render content with strong emphasis (bold).
    fn strong(&self, content: Self::Output) -> Self::Output;

    /// Render content at a reduced size.
    fn small(&self, content: Self::Output) -> Self::Output;

    /// Tag content with a semantic class.
    fn span(&self, class: &str, content: Self::Output) -> Self::Output;

    fn sup(&self, content: Self::Output) -> Self::Output;

    fn sub(&self, content: Self::Output) -> Self::Output;

    /// Hyperlink the content to `href`.
    fn link(&self, href: &str, content: Self::Output) -> Self::Output;

    /// A block paragraph.
    fn paragraph(&self, class: &str, content: Self::Output) -> Self::Output;

    /// A list whose items were rendered with [`OutputFormat::item`].
    fn list(&self, ordered: bool, items: Self::Output) -> Self::Output;

    fn item(&self, content: Self::Output) -> Self::Output;

    fn blockquote(&self, content: Self::Output) -> Self::Output;
}
