/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Issue summaries.

use crate::facets::{delegate_facets, Copyrighted, Periodical};
use crate::persons::extract_persons;
use crate::render_element;
use crate::titles::{
    extract_titles, format_title_set, journal_languages, TitleElements, TitleSetOptions,
};
use erudit_core::error::parse_numeric;
use erudit_core::{
    EditorKind, Error, Person, RenderOptions, Result, Theme, ThemeParal, TitleSet,
};
use erudit_dom::{Document, Element, RenderSettings};
use indexmap::IndexMap;

/// A parsed issue summary: journal titles, themes, editors and the
/// numbering of one issue.
#[derive(Debug, Clone)]
pub struct Publication {
    document: Document,
}

impl Publication {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(Self::new(Document::parse(xml)?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(Document::from_bytes(bytes)?))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn root(&self) -> &Element {
        self.document.root()
    }

    pub fn periodical(&self) -> Periodical<'_> {
        Periodical::new(self.root())
    }

    pub fn copyrighted(&self) -> Copyrighted<'_> {
        Copyrighted::new(self.root())
    }

    /// Titles of the journal.
    pub fn get_titles(&self, opts: &RenderOptions) -> Result<TitleSet> {
        let languages = journal_languages(self.root(), opts);
        extract_titles(self.root(), &TitleElements::JOURNAL, languages, opts)
    }

    /// Journal titles, equivalents included, as one string.
    pub fn get_formatted_title(&self, opts: &RenderOptions) -> Result<String> {
        let titles = self.get_titles(opts)?;
        Ok(format_title_set(&titles, &TitleSetOptions::JOURNAL))
    }

    /// Text of the first `nonumero`; empty when the element is.
    pub fn get_number(&self) -> Option<String> {
        self.root().get_itertext("nonumero")
    }

    /// The editorial note of the issue.
    pub fn get_notegen_edito(&self, opts: &RenderOptions) -> Option<String> {
        render_element(
            self.root().find(r#"notegen[@typenoteg="edito"]"#),
            &RenderSettings::default(),
            opts,
        )
    }

    pub fn get_article_count(&self) -> Result<Option<u32>> {
        self.root()
            .get_itertext("nbarticle")
            .map(|count| parse_numeric("nbarticle", &count))
            .transpose()
    }

    /// Theme title sets keyed by theme id, in document order.
    fn theme_titles(&self, opts: &RenderOptions) -> Result<Vec<(String, TitleSet)>> {
        // A theme's parallel names are all kept, whatever the issue declares.
        let opts = opts.with_strict_language_check(false);
        let mut themes = Vec::new();
        for grtheme in self.root().find_all("grtheme") {
            let Some(id) = grtheme.attr("id") else {
                tracing::debug!("theme without id skipped");
                continue;
            };
            let languages = grtheme
                .attr("lang")
                .map(|langs| langs.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default();
            let set = extract_titles(grtheme, &TitleElements::THEME, languages, &opts)?;
            themes.push((id.to_string(), set));
        }
        Ok(themes)
    }

    /// Themes keyed by id, each with the chief editors assigned to it.
    pub fn get_themes(&self, opts: &RenderOptions) -> Result<IndexMap<String, Theme>> {
        let editors = self.chief_editors(opts);
        let themes = self
            .theme_titles(opts)?
            .into_iter()
            .map(|(id, set)| {
                let paral = set
                    .paral
                    .into_iter()
                    .map(|title| {
                        (
                            title.lang.clone(),
                            ThemeParal {
                                name: title.title,
                                subname: title.subtitle,
                                lang: title.lang,
                            },
                        )
                    })
                    .collect();
                let redacteurchef = editors
                    .iter()
                    .filter(|editor| editor.themes.contains(&id))
                    .cloned()
                    .collect();
                let theme = Theme {
                    name: set.main.title,
                    subname: set.main.subtitle,
                    lang: set.main.lang,
                    redacteurchef,
                    paral,
                };
                (id, theme)
            })
            .collect();
        Ok(themes)
    }

    /// Each theme's names as one string, keyed by theme id.
    pub fn get_formatted_themes(&self, opts: &RenderOptions) -> Result<IndexMap<String, String>> {
        Ok(self
            .theme_titles(opts)?
            .into_iter()
            .map(|(id, set)| (id, format_title_set(&set, &TitleSetOptions::ARTICLE)))
            .collect())
    }

    fn chief_editors(&self, opts: &RenderOptions) -> Vec<Person> {
        extract_persons(self.root(), "redacteurchef", opts)
    }

    /// Chief editors, optionally restricted to one kind (`regulier` or
    /// `invite`) and to those assigned to `theme`.
    ///
    /// An unknown kind is rejected before the document is read.
    pub fn get_redacteurchef(
        &self,
        typerc: Option<&str>,
        theme: Option<&str>,
        opts: &RenderOptions,
    ) -> Result<Vec<Person>> {
        let kind = typerc
            .map(|typerc| {
                typerc
                    .parse::<EditorKind>()
                    .map_err(|()| Error::invalid("typerc", typerc))
            })
            .transpose()?;
        Ok(self
            .chief_editors(opts)
            .into_iter()
            .filter(|editor| kind.is_none() || editor.typerc == kind)
            .filter(|editor| theme.map_or(true, |theme| editor.themes.iter().any(|t| t == theme)))
            .collect())
    }

    pub fn get_directors(&self, opts: &RenderOptions) -> Vec<Person> {
        extract_persons(self.root(), "directeur", opts)
    }

    pub fn get_editors(&self, opts: &RenderOptions) -> Vec<Person> {
        extract_persons(self.root(), "redacteur", opts)
    }

    pub fn get_guest_editors(&self, opts: &RenderOptions) -> Vec<Person> {
        self.chief_editors(opts)
            .into_iter()
            .filter(|editor| editor.typerc == Some(EditorKind::Invite))
            .collect()
    }
}

delegate_facets!(Publication);
