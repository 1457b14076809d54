/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Multilingual titles.
//!
//! Articles, journals and themes all carry the same title structure: a
//! group element holding a main title and subtitle, plus any number of
//! parallel titles and subtitles tagged with a `lang` attribute.
//! [`extract_titles`] sorts the parallel titles into those in a declared
//! language of the entity (`paral`) and the others (`equivalent`);
//! [`format_title`] and [`format_title_set`] turn the result into one
//! display string.


use crate::render_element;
use erudit_core::locale::is_french;
use erudit_core::{Error, RenderOptions, Result, SectionTitles, Title, TitleSet};
use erudit_dom::{Element, Node, RenderSettings};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// A title ending with sentence punctuation, possibly inside closing tags.
static ENDS_WITH_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?](?:</[a-zA-Z]+>){0,2}$").unwrap());

const SECTION_TITLES: [(&str, &str); 3] = [
    ("surtitre", "surtitreparal"),
    ("surtitre2", "surtitreparal2"),
    ("surtitre3", "surtitreparal3"),
];

/// Element names making up one kind of title group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleElements {
    pub root: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paral_title: &'static str,
    pub paral_subtitle: &'static str,
}

impl TitleElements {
    pub const ARTICLE: Self = Self {
        root: "grtitre",
        title: "titre",
        subtitle: "sstitre",
        paral_title: "titreparal",
        paral_subtitle: "sstitreparal",
    };

    pub const JOURNAL: Self = Self {
        root: "revue",
        title: "titrerev",
        subtitle: "sstitrerev",
        paral_title: "titrerevparal",
        paral_subtitle: "sstitrerevparal",
    };

    pub const THEME: Self = Self {
        root: "grtheme",
        title: "theme",
        subtitle: "sstheme",
        paral_title: "themeparal",
        paral_subtitle: "ssthemeparal",
    };
}

/// How a [`TitleSet`] is turned into one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSetOptions {
    pub use_equivalent: bool,
    pub with_subtitle: bool,
}

impl TitleSetOptions {
    /// Main and parallel titles, with subtitles.
    pub const ARTICLE: Self = Self {
        use_equivalent: false,
        with_subtitle: true,
    };

    /// Main, parallel and equivalent titles, with subtitles.
    pub const JOURNAL: Self = Self {
        use_equivalent: true,
        with_subtitle: true,
    };
}

impl Default for TitleSetOptions {
    fn default() -> Self {
        Self::ARTICLE
    }
}

fn title_settings() -> RenderSettings {
    RenderSettings::strip(["renvoi"])
}

/// Parallel elements by language. A language keeps the position of its
/// first occurrence; a later element in the same language replaces the
/// earlier one.
fn find_paral<'a>(root: &'a Element, name: &str) -> IndexMap<&'a str, &'a Element> {
    let mut found = IndexMap::new();
    for element in root.children_named(name) {
        if let Some(lang) = element.attr("lang") {
            found.insert(lang, element);
        }
    }
    found
}

/// True when the first non-blank content of `subtitle` is uppercase markup.
fn starts_with_forced_uppercase(subtitle: &Element) -> bool {
    subtitle
        .children()
        .iter()
        .find(|node| match node {
            Node::Text(text) => !text.trim().is_empty(),
            Node::Element(_) => true,
        })
        .is_some_and(|node| match node {
            Node::Element(element) => {
                element.name() == "marquage" && element.attr("typemarq") == Some("majuscule")
            }
            Node::Text(_) => false,
        })
}

fn build_title(
    title: Option<&Element>,
    subtitle: Option<&Element>,
    lang: &str,
    opts: &RenderOptions,
) -> Title {
    let settings = title_settings();
    let forced = subtitle.is_some_and(starts_with_forced_uppercase);
    Title::new(
        render_element(title, &settings, opts),
        render_element(subtitle, &settings, opts),
        lang,
    )
    .with_forced_uppercase(forced)
}

/// Declared languages of the journal in `scope` (`revue@lang`), or the
/// fallback language when the journal declares none.
pub fn journal_languages(scope: &Element, opts: &RenderOptions) -> Vec<String> {
    let languages: Vec<String> = scope
        .find_self_or("revue")
        .and_then(|revue| revue.attr("lang"))
        .map(|langs| langs.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    if languages.is_empty() {
        vec![opts.fallback_language.to_string()]
    } else {
        languages
    }
}

/// Extract the titles of the group described by `elements`.
///
/// `languages` are the entity's declared languages, principal first; the
/// list is consumed as parallel titles claim their language. The group
/// element is looked up at `scope` itself or below it; when it is absent
/// the result is [`Error::MissingRequiredElement`].
pub fn extract_titles(
    scope: &Element,
    elements: &TitleElements,
    languages: Vec<String>,
    opts: &RenderOptions,
) -> Result<TitleSet> {
    let root = scope.find_self_or(elements.root).ok_or_else(|| {
        tracing::debug!(element = elements.root, "title group missing");
        Error::missing(elements.root)
    })?;

    let declared = languages.clone();
    let mut remaining = languages;
    let mut set = TitleSet::default();

    let paral_subtitles = find_paral(root, elements.paral_subtitle);
    for (lang, title) in find_paral(root, elements.paral_title) {
        if title.is_blank() {
            continue;
        }
        let built = build_title(Some(title), paral_subtitles.get(lang).copied(), lang, opts);
        let position = remaining.iter().position(|l| l == lang);
        if let Some(position) = position {
            remaining.remove(position);
            set.paral.push(built);
        } else if !opts.strict_language_check {
            set.paral.push(built);
        } else {
            set.equivalent.push(built);
        }
    }

    // Stable: titles in undeclared languages keep document order at the end.
    set.paral.sort_by_key(|title| {
        declared
            .iter()
            .position(|l| *l == title.lang)
            .unwrap_or(usize::MAX)
    });

    let title = root.find(elements.title).filter(|t| !t.is_empty());
    let subtitle = root.find(elements.subtitle);
    let lang = remaining
        .first()
        .map(String::as_str)
        .unwrap_or(opts.fallback_language);
    set.main = build_title(title, subtitle, lang, opts);

    Ok(set)
}

/// Format one title, with its subtitle when asked for and present.
///
/// The separator is a space after sentence punctuation, "\u{a0}: " in
/// French and ": " otherwise. A French subtitle following a colon starts
/// in lowercase unless it opens with uppercase markup.
pub fn format_title(title: &Title, with_subtitle: bool) -> Option<String> {
    let subtitle = title.subtitle.as_deref().filter(|s| !s.is_empty());
    let (main, subtitle) = match (title.title.as_deref(), subtitle) {
        (main, None) => return main.map(str::to_string),
        (_, Some(_)) if !with_subtitle => return title.title.clone(),
        (None, Some(subtitle)) => return Some(subtitle.to_string()),
        (Some(main), Some(subtitle)) => (main, subtitle),
    };

    let french = is_french(&title.lang);
    let separator = if ENDS_WITH_PUNCTUATION.is_match(main.trim_end_matches(is_ascii_space)) {
        " "
    } else if french {
        "\u{a0}: "
    } else {
        ": "
    };

    let subtitle = if french && separator.contains(':') && !title.subtitle_forced_uppercase() {
        lowercase_first(subtitle)
    } else {
        subtitle.to_string()
    };

    Some(format!("{main}{separator}{subtitle}"))
}

fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join formatted titles into one section, skipping any already shown.
fn push_section(
    sections: &mut Vec<String>,
    seen: &mut Vec<String>,
    titles: &[Title],
    with_subtitle: bool,
) {
    let mut joined: Vec<String> = Vec::new();
    for title in titles {
        if let Some(formatted) = format_title(title, with_subtitle) {
            if !seen.contains(&formatted) {
                seen.push(formatted.clone());
                joined.push(formatted);
            }
        }
    }
    if !joined.is_empty() {
        sections.push(joined.join(" / "));
    }
}

/// Format a whole title set: main title, then parallel titles, then (if
/// requested) equivalent titles, separated by " / ".
pub fn format_title_set(set: &TitleSet, options: &TitleSetOptions) -> String {
    let mut sections = Vec::new();
    let mut seen = Vec::new();
    if set.main.title.is_some() {
        if let Some(main) = format_title(&set.main, options.with_subtitle) {
            seen.push(main.clone());
            sections.push(main);
        }
    }
    push_section(&mut sections, &mut seen, &set.paral, options.with_subtitle);
    if options.use_equivalent {
        push_section(&mut sections, &mut seen, &set.equivalent, options.with_subtitle);
    }
    sections.join(" / ")
}

/// Section headings (`surtitre`, `surtitre2`, `surtitre3`) at `level`.
///
/// Levels other than 1 to 3 are rejected before the tree is read.
pub fn extract_section_titles(
    scope: &Element,
    level: u8,
    opts: &RenderOptions,
) -> Result<Option<SectionTitles>> {
    let (main_name, paral_name) = match level {
        1..=3 => SECTION_TITLES[usize::from(level) - 1],
        _ => return Err(Error::invalid("level", level.to_string())),
    };

    let settings = title_settings();
    let main = render_element(scope.find(main_name), &settings, opts);
    let mut paral = IndexMap::new();
    for element in scope.find_all(paral_name) {
        if let (Some(lang), Some(text)) = (
            element.attr("lang"),
            render_element(Some(element), &settings, opts),
        ) {
            paral.insert(lang.to_string(), text);
        }
    }

    if main.is_none() && paral.is_empty() {
        return Ok(None);
    }
    Ok(Some(SectionTitles { main, paral }))
}

/// Titles of the works reviewed by a review article (`trefbiblio`).
pub fn extract_reviewed_works(scope: &Element, opts: &RenderOptions) -> Vec<String> {
    let settings = title_settings();
    scope
        .find_all("trefbiblio")
        .into_iter()
        .filter_map(|work| render_element(Some(work), &settings, opts))
        .collect()
}
