/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.
//!
//! Only a fixed set of tags is ever written: `em`, `strong`, `small`,
//! `span[class]`, `sup`, `sub`, `a[href]`, `p[class]`, `ol`, `ul`, `li`
//! and `blockquote`.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Html;

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

fn wrap(tag: &str, content: String) -> String {
    if content.is_empty() {
        return content;
    }
    format!("<{tag}>{content}</{tag}>")
}

impl OutputFormat for Html {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        // Raw UTF-8, only markup-significant characters are escaped.
        escape_text(s)
    }

    fn push(&self, acc: &mut Self::Output, item: Self::Output) {
        acc.push_str(&item);
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn emph(&self, content: Self::Output) -> Self::Output {
        wrap("em", content)
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        wrap("strong", content)
    }

    fn small(&self, content: Self::Output) -> Self::Output {
        wrap("small", content)
    }

    fn span(&self, class: &str, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!(r#"<span class="{}">{}</span>"#, escape_attr(class), content)
    }

    fn sup(&self, content: Self::Output) -> Self::Output {
        wrap("sup", content)
    }

    fn sub(&self, content: Self::Output) -> Self::Output {
        wrap("sub", content)
    }

    fn link(&self, href: &str, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!(r#"<a href="{}">{}</a>"#, escape_attr(href), content)
    }

    fn paragraph(&self, class: &str, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!(r#"<p class="{}">{}</p>"#, escape_attr(class), content)
    }

    fn list(&self, ordered: bool, items: Self::Output) -> Self::Output {
        wrap(if ordered { "ol" } else { "ul" }, items)
    }

    fn item(&self, content: Self::Output) -> Self::Output {
        format!("<li>{content}</li>")
    }

    fn blockquote(&self, content: Self::Output) -> Self::Output {
        wrap("blockquote", content)
    }
}
