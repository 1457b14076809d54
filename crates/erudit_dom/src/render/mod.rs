/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of the Érudit inline markup.
//!
//! A single walk over an element's content maps the source vocabulary
//! onto [`OutputFormat`] calls; [`Html`] and [`PlainText`] spell them
//! out. The walk reads the tree and builds a new string, so the same
//! subtree can be rendered any number of times, from any thread.

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;

use crate::document::{Element, Node};
use regex::Regex;
use std::sync::LazyLock;

static INTER_TAG_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">[ \t\r]*\n[ \t\r\n]*<").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r\n]+").unwrap());

/// What to do with footnote references (`renvoi`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FootnotePolicy {
    /// Remove the reference and its label.
    #[default]
    Drop,
    /// Keep the label as a link to the note (`#{idref}`).
    Link,
}

/// Per-call rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Element names removed before rendering. Text following a removed
    /// element is kept.
    pub strip: Vec<String>,
    /// Element names rendered as their content only, markup dropped.
    pub unwrap: Vec<String>,
    pub footnotes: FootnotePolicy,
}

impl RenderSettings {
    pub fn strip<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strip: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_unwrap<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unwrap.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_footnotes(mut self, footnotes: FootnotePolicy) -> Self {
        self.footnotes = footnotes;
        self
    }

    fn strips(&self, name: &str) -> bool {
        self.strip.iter().any(|s| s == name)
    }

    fn unwraps(&self, name: &str) -> bool {
        self.unwrap.iter().any(|s| s == name)
    }
}

/// Render the content of `element` as restricted HTML.
///
/// Returns `None` for a missing element or when nothing but whitespace
/// is left.
pub fn to_html(element: Option<&Element>, settings: &RenderSettings) -> Option<String> {
    render_with_format::<Html>(element?, settings)
}

/// Render the text content of `element`, markup removed.
pub fn to_text(element: Option<&Element>, settings: &RenderSettings) -> Option<String> {
    render_with_format::<PlainText>(element?, settings)
}

/// Render the content of `element` with any output format.
pub fn render_with_format<F: OutputFormat>(
    element: &Element,
    settings: &RenderSettings,
) -> Option<String> {
    let fmt = F::default();
    let output = render_children(&fmt, element, settings);
    normalize_whitespace(&fmt.finish(output))
}

fn render_children<F: OutputFormat>(
    fmt: &F,
    element: &Element,
    settings: &RenderSettings,
) -> F::Output {
    let mut out = F::Output::default();
    for node in element.children() {
        match node {
            Node::Text(text) => fmt.push(&mut out, fmt.text(text)),
            Node::Element(child) if settings.strips(child.name()) => {}
            Node::Element(child) => {
                let rendered = render_element(fmt, child, settings);
                fmt.push(&mut out, rendered);
            }
        }
    }
    out
}

fn render_element<F: OutputFormat>(
    fmt: &F,
    element: &Element,
    settings: &RenderSettings,
) -> F::Output {
    match element.name() {
        "marquepage" => return F::Output::default(),
        "renvoi" if settings.footnotes == FootnotePolicy::Drop => {
            return F::Output::default();
        }
        _ => {}
    }

    let content = render_children(fmt, element, settings);
    if settings.unwraps(element.name()) {
        return content;
    }
    match element.name() {
        "marquage" => match element.attr("typemarq") {
            Some("gras") => fmt.strong(content),
            Some("italique") => fmt.emph(content),
            Some("taillereduite") => fmt.small(content),
            Some(kind) if !kind.is_empty() => fmt.span(kind, content),
            _ => content,
        },
        "exposant" => fmt.sup(content),
        "indice" => fmt.sub(content),
        "liensimple" => match element.attr("href") {
            Some(href) => fmt.link(href, content),
            None => content,
        },
        "renvoi" => match element.attr("idref") {
            Some(idref) => fmt.link(&format!("#{idref}"), content),
            None => content,
        },
        "citation" => fmt.span("citation", content),
        "alinea" => fmt.paragraph("alinea", content),
        "listeord" => fmt.list(true, content),
        "listenonord" => fmt.list(false, content),
        "elemliste" => fmt.item(content),
        "bloccitation" => fmt.blockquote(content),
        // caracunicode, equationligne, objetmedia and unknown elements
        // contribute their text only.
        _ => content,
    }
}

fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Collapse ASCII whitespace runs to a single space and drop newline runs
/// between tags. U+00A0 is left alone. Returns `None` when the result is
/// empty.
pub fn normalize_whitespace(s: &str) -> Option<String> {
    let collapsed = INTER_TAG_NEWLINES.replace_all(s, "><");
    let collapsed = WHITESPACE_RUN.replace_all(&collapsed, " ");
    let trimmed = collapsed.trim_matches(is_ascii_space);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn html(xml: &str) -> Option<String> {
        let doc = Document::parse(xml).unwrap();
        to_html(Some(doc.root()), &RenderSettings::default())
    }

    fn text(xml: &str) -> Option<String> {
        let doc = Document::parse(xml).unwrap();
        to_text(Some(doc.root()), &RenderSettings::default())
    }

    #[test]
    fn test_marquage_mapping() {
        assert_eq!(
            html(r#"<t>a <marquage typemarq="gras">b</marquage> <marquage typemarq="italique">c</marquage> <marquage typemarq="taillereduite">d</marquage></t>"#)
                .as_deref(),
            Some("a <strong>b</strong> <em>c</em> <small>d</small>")
        );
        assert_eq!(
            html(r#"<t><marquage typemarq="majuscule">Sous</marquage>-titre</t>"#).as_deref(),
            Some(r#"<span class="majuscule">Sous</span>-titre"#)
        );
    }

    #[test]
    fn test_element_mapping() {
        assert_eq!(
            html(r#"<t>x<exposant>2</exposant> H<indice>2</indice>O <citation>dit</citation> <liensimple href="http://e.org">lien</liensimple></t>"#)
                .as_deref(),
            Some(r#"x<sup>2</sup> H<sub>2</sub>O <span class="citation">dit</span> <a href="http://e.org">lien</a>"#)
        );
        assert_eq!(
            html("<t><listeord><elemliste>un</elemliste><elemliste>deux</elemliste></listeord><bloccitation>q</bloccitation></t>")
                .as_deref(),
            Some("<ol><li>un</li><li>deux</li></ol><blockquote>q</blockquote>")
        );
    }

    #[test]
    fn test_unknown_elements_keep_their_text() {
        assert_eq!(
            html("<t>a <inconnu>b <caracunicode>c</caracunicode></inconnu> <marquepage/>d</t>").as_deref(),
            Some("a b c d")
        );
    }

    #[test]
    fn test_paragraphs() {
        let xml = "<resume>\n  <alinea>Premier.</alinea>\n  <alinea>Second.</alinea>\n</resume>";
        assert_eq!(
            html(xml).as_deref(),
            Some(r#"<p class="alinea">Premier.</p><p class="alinea">Second.</p>"#)
        );
        assert_eq!(text(xml).as_deref(), Some("Premier. Second."));
    }

    #[test]
    fn test_footnote_policy() {
        let doc = Document::parse(
            r#"<alinea>Texte<renvoi idref="no1" id="re1no1">1</renvoi> suite</alinea>"#,
        )
        .unwrap();
        let dropped = to_html(Some(doc.root()), &RenderSettings::default());
        assert_eq!(dropped.as_deref(), Some("Texte suite"));
        let linked = to_html(
            Some(doc.root()),
            &RenderSettings::default().with_footnotes(FootnotePolicy::Link),
        );
        assert_eq!(linked.as_deref(), Some(r##"Texte<a href="#no1">1</a> suite"##));
    }

    #[test]
    fn test_strip_keeps_tail_and_leaves_tree_untouched() {
        let doc = Document::parse("<resume><titre>Résumé</titre><alinea>Corps</alinea> fin</resume>").unwrap();
        let settings = RenderSettings::strip(["titre"]);
        assert_eq!(to_text(Some(doc.root()), &settings).as_deref(), Some("Corps fin"));
        assert_eq!(doc.root().itertext(), "RésuméCorps fin");
    }

    #[test]
    fn test_unwrap_keeps_content_only() {
        let doc = Document::parse(
            r#"<nompers><prenom><marquage typemarq="petitecap">Jean</marquage><exposant>r</exposant></prenom></nompers>"#,
        )
        .unwrap();
        let settings = RenderSettings::default().with_unwrap(["marquage"]);
        assert_eq!(
            to_html(doc.find("prenom"), &settings).as_deref(),
            Some("Jean<sup>r</sup>")
        );
    }

    #[test]
    fn test_missing_or_blank_input() {
        assert_eq!(to_html(None, &RenderSettings::default()), None);
        assert_eq!(html("<t>  \n </t>"), None);
        assert_eq!(text("<t/>"), None);
    }

    #[test]
    fn test_plain_text_strips_markup() {
        assert_eq!(
            text(r#"<t>Le <marquage typemarq="gras">titre</marquage><exposant>e</exposant></t>"#).as_deref(),
            Some("Le titree")
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  a \t\n b  ").as_deref(),
            Some("a b")
        );
        assert_eq!(
            normalize_whitespace("<p>a</p>\n   <p>b</p>").as_deref(),
            Some("<p>a</p><p>b</p>")
        );
        assert_eq!(
            normalize_whitespace("\u{a0}Titre\u{a0}: x ").as_deref(),
            Some("\u{a0}Titre\u{a0}: x")
        );
        assert_eq!(normalize_whitespace(" \n\t "), None);
    }

    #[test]
    fn test_normalize_whitespace_is_idempotent() {
        for input in ["a\n\n b", "<p>x</p>\n <p> y </p>", "\u{a0} a \u{a0}", "x"] {
            let once = normalize_whitespace(input).unwrap();
            assert_eq!(normalize_whitespace(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_rendered_plain_text_is_already_normalized() {
        let xml = "<resume>\n  <alinea>Un  <marquage typemarq=\"italique\">résumé</marquage>\n\tlong.</alinea>\n  <listenonord>\n    <elemliste>un</elemliste>\n    <elemliste> deux </elemliste>\n  </listenonord>\n  <alinea>Titre\u{a0}: fin</alinea>\n</resume>";
        let rendered = text(xml).unwrap();
        assert_eq!(rendered, "Un résumé long. un deux Titre\u{a0}: fin");
        assert_eq!(normalize_whitespace(&rendered), Some(rendered));
    }

    #[test]
    fn test_html_escapes_text() {
        assert_eq!(html("<t>a &lt; b &amp; c</t>").as_deref(), Some("a &lt; b &amp; c"));
        assert_eq!(text("<t>a &lt; b &amp; c</t>").as_deref(), Some("a < b & c"));
    }
}
