/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Journal summaries.

use crate::render_element;
use crate::titles::{
    extract_titles, format_title_set, journal_languages, TitleElements, TitleSetOptions,
};
use erudit_core::{RenderOptions, Result, TitleSet};
use erudit_dom::{Document, Element, RenderSettings};
use indexmap::IndexMap;

/// A parsed journal summary: titles, publication years, notes and the
/// list of published issues.
#[derive(Debug, Clone)]
pub struct Journal {
    document: Document,
}

impl Journal {
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

    pub fn get_titles(&self, opts: &RenderOptions) -> Result<TitleSet> {
        let languages = journal_languages(self.root(), opts);
        extract_titles(self.root(), &TitleElements::JOURNAL, languages, opts)
    }

    /// All titles of the journal, equivalents included.
    pub fn get_title(&self, opts: &RenderOptions) -> Result<String> {
        let titles = self.get_titles(opts)?;
        Ok(format_title_set(&titles, &TitleSetOptions::JOURNAL))
    }

    /// Years with a published issue (`annee@valeur`), sorted.
    pub fn get_publication_years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .root()
            .find_all("annee")
            .into_iter()
            .filter_map(|annee| annee.attr("valeur"))
            .map(str::to_string)
            .collect();
        years.sort();
        years
    }

    pub fn get_first_publication_year(&self) -> Option<String> {
        self.get_publication_years().into_iter().next()
    }

    pub fn get_last_publication_year(&self) -> Option<String> {
        self.get_publication_years().pop()
    }

    /// "first - last", or the only year.
    pub fn get_publication_period(&self) -> Option<String> {
        match self.get_publication_years().as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, .., last] => Some(format!("{first} - {last}")),
        }
    }

    /// Notes keyed by their `langue`. Notes without a language or text are
    /// left out.
    pub fn get_notes(&self, opts: &RenderOptions) -> IndexMap<String, Vec<String>> {
        let settings = RenderSettings::default();
        let mut notes: IndexMap<String, Vec<String>> = IndexMap::new();
        for note in self.root().find_all("note") {
            let Some(lang) = note.attr("langue") else {
                continue;
            };
            if note.is_blank() {
                continue;
            }
            if let Some(text) = render_element(Some(note), &settings, opts) {
                notes.entry(lang.to_string()).or_default().push(text);
            }
        }
        notes
    }

    /// `pid` of every issue, in document order.
    pub fn get_published_issues_pids(&self) -> Vec<String> {
        self.root()
            .find_all("numero")
            .into_iter()
            .filter_map(|numero| numero.attr("pid"))
            .map(str::to_string)
            .collect()
    }

    /// The first issue listed is the latest one.
    pub fn get_last_published_issue_pid(&self) -> Option<String> {
        self.root()
            .find("numero")
            .and_then(|numero| numero.attr("pid"))
            .map(str::to_string)
    }
}
