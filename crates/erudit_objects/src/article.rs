/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Article documents (`article`).

use crate::facets::{delegate_facets, Copyrighted, Periodical};
use crate::persons::{extract_person, format_authors, format_name, CitationStyle};
use crate::render_element;
use crate::titles::{
    extract_reviewed_works, extract_section_titles, extract_titles, format_title_set,
    journal_languages, TitleElements, TitleSetOptions,
};
use erudit_core::error::parse_numeric;
use erudit_core::{
    Abstract, Notegen, Person, Reference, RenderOptions, Result, SectionTitles, TitleSet,
};
use erudit_dom::{Document, Element, FootnotePolicy, RenderSettings};
use indexmap::IndexMap;

/// A parsed article.
#[derive(Debug, Clone)]
pub struct Article {
    document: Document,
}

impl Article {
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

    /// Principal language (`lang`) followed by `languesuppl`.
    pub fn get_languages(&self) -> Vec<String> {
        let root = self.root();
        root.attr("lang")
            .into_iter()
            .chain(root.attr("languesuppl").into_iter().flat_map(str::split_whitespace))
            .filter(|lang| !lang.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn get_titles(&self, opts: &RenderOptions) -> Result<TitleSet> {
        extract_titles(
            self.root(),
            &TitleElements::ARTICLE,
            self.get_languages(),
            opts,
        )
    }

    /// Main and parallel titles as one string.
    pub fn get_title(&self, opts: &RenderOptions) -> Result<String> {
        let titles = self.get_titles(opts)?;
        Ok(format_title_set(&titles, &TitleSetOptions::ARTICLE))
    }

    /// Like [`Article::get_title`], but an untitled review reads as the
    /// works it reviews.
    pub fn get_formatted_title(&self, opts: &RenderOptions) -> Result<String> {
        let titles = self.get_titles(opts)?;
        if titles.main.title.is_none() {
            let works = self.get_reviewed_works(opts);
            if !works.is_empty() {
                return Ok(works.join(" / "));
            }
        }
        Ok(format_title_set(&titles, &TitleSetOptions::ARTICLE))
    }

    pub fn get_section_titles(
        &self,
        level: u8,
        opts: &RenderOptions,
    ) -> Result<Option<SectionTitles>> {
        extract_section_titles(self.root(), level, opts)
    }

    pub fn get_reviewed_works(&self, opts: &RenderOptions) -> Vec<String> {
        extract_reviewed_works(self.root(), opts)
    }

    /// Titles of the journal the article appeared in.
    pub fn get_journal_titles(&self, opts: &RenderOptions) -> Result<TitleSet> {
        let languages = journal_languages(self.root(), opts);
        extract_titles(self.root(), &TitleElements::JOURNAL, languages, opts)
    }

    pub fn get_formatted_journal_title(&self, opts: &RenderOptions) -> Result<String> {
        let titles = self.get_journal_titles(opts)?;
        Ok(format_title_set(&titles, &TitleSetOptions::JOURNAL))
    }

    /// Authors, leaving out translators and other contributors.
    pub fn get_authors(&self, opts: &RenderOptions) -> Vec<Person> {
        self.root()
            .find_all("grauteur/auteur")
            .into_iter()
            .filter(|auteur| is_author(auteur))
            .map(|auteur| extract_person(auteur, opts))
            .collect()
    }

    /// One display name per author, suffixes included.
    pub fn get_formatted_author_names(&self, opts: &RenderOptions) -> Vec<String> {
        self.get_authors(opts)
            .iter()
            .map(|author| format_name(author, opts.locale, true))
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn get_formatted_authors(&self, style: CitationStyle, opts: &RenderOptions) -> String {
        format_authors(style, &self.get_authors(opts), opts.locale)
    }

    /// Abstracts, with their headings removed and footnote references
    /// kept as links.
    pub fn get_abstracts(&self, opts: &RenderOptions) -> Vec<Abstract> {
        let settings = RenderSettings::strip(["titre"]).with_footnotes(FootnotePolicy::Link);
        self.root()
            .find_all("resume")
            .into_iter()
            .filter_map(|resume| {
                let content = render_element(Some(resume), &settings, opts)?;
                Some(Abstract {
                    lang: resume.attr("lang").map(str::to_string),
                    kind: resume.attr("typeresume").map(str::to_string),
                    content,
                })
            })
            .collect()
    }

    /// Keywords by language, in document order.
    pub fn get_keywords(&self, opts: &RenderOptions) -> IndexMap<String, Vec<String>> {
        let settings = RenderSettings::default();
        let mut keywords: IndexMap<String, Vec<String>> = IndexMap::new();
        for group in self.root().find_all("grmotcle") {
            let Some(lang) = group.attr("lang") else {
                continue;
            };
            let words = group
                .children_named("motcle")
                .filter_map(|word| render_element(Some(word), &settings, opts));
            keywords.entry(lang.to_string()).or_default().extend(words);
        }
        keywords
    }

    /// Bibliography entries, without their identifiers, and their DOI.
    pub fn get_references(&self, opts: &RenderOptions) -> Vec<Reference> {
        let settings = RenderSettings::strip(["idpublic"]);
        self.root()
            .find_all("refbiblio")
            .into_iter()
            .filter_map(|reference| {
                Some(Reference {
                    title: render_element(Some(reference), &settings, opts)?,
                    doi: reference.get_text(r#"idpublic[@scheme="doi"]"#),
                })
            })
            .collect()
    }

    pub fn get_notegens(&self, opts: &RenderOptions) -> Vec<Notegen> {
        let settings = RenderSettings::default();
        self.root()
            .find_all("liminaire//notegen")
            .into_iter()
            .map(|notegen| Notegen {
                kind: notegen.attr("typenoteg").map(str::to_string),
                content: notegen
                    .find_all("alinea")
                    .into_iter()
                    .filter_map(|alinea| render_element(Some(alinea), &settings, opts))
                    .collect(),
            })
            .collect()
    }

    pub fn get_doi(&self) -> Option<String> {
        self.root()
            .get_text(r#"infoarticle/idpublic[@scheme="doi"]"#)
    }

    pub fn get_first_page(&self) -> Option<String> {
        self.root().get_text("pagination/ppage")
    }

    pub fn get_last_page(&self) -> Option<String> {
        self.root().get_text("pagination/dpage")
    }

    /// Position of the article in its issue.
    pub fn get_ordseq(&self) -> Result<Option<i32>> {
        self.root()
            .attr("ordseq")
            .map(|ordseq| parse_numeric("ordseq", ordseq))
            .transpose()
    }
}

delegate_facets!(Article);

/// Contributors other than authors carry a `contribution` typed otherwise.
fn is_author(auteur: &Element) -> bool {
    auteur
        .children_named("contribution")
        .all(|contribution| contribution.attr("typecontrib").map_or(true, |kind| kind == "aut"))
}
