/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Issue numbering and publication periods.
//!
//! Words are French message ids looked up in the `numbering` context of
//! the catalog, so an empty catalog renders French and the English
//! catalog renders "Volume 56, Number 3-4, September–December 2015".

use erudit_core::{Config, Locale, NumberType, NumberingInfo, RenderOptions};
use erudit_dom::Element;

const CONTEXT: &str = "numbering";

/// Options for [`format_numbering`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberingOptions {
    /// "Vol." and "N°" instead of "Volume" and "Numéro".
    pub abbreviated: bool,
}

impl NumberingOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            abbreviated: config.abbreviated_numbering,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn volume_word(options: &NumberingOptions) -> &'static str {
    if options.abbreviated {
        "Vol."
    } else {
        "Volume"
    }
}

fn number_word(options: &NumberingOptions, html: bool) -> &'static str {
    match (options.abbreviated, html) {
        (false, _) => "Numéro",
        (true, false) => "N°",
        (true, true) => "N<sup>o</sup>",
    }
}

fn special_issue_word(options: &NumberingOptions, html: bool) -> &'static str {
    match (options.abbreviated, html) {
        (false, _) => "Numéro hors-série",
        (true, false) => "N° hors-série",
        (true, true) => "N<sup>o</sup> hors-série",
    }
}

fn type_word(number_type: &NumberType) -> &str {
    match number_type {
        NumberType::SpecialIssue => "Hors-série",
        NumberType::Supplement => "Supplément",
        NumberType::Index => "Index",
        NumberType::Other(code) => code,
    }
}

/// Comma-separated clauses; only the first one keeps its capital.
struct Clauses<'a> {
    locale: &'a Locale,
    parts: Vec<String>,
}

impl<'a> Clauses<'a> {
    fn new(locale: &'a Locale) -> Self {
        Self {
            locale,
            parts: Vec::new(),
        }
    }

    fn cased(&self, word: &str) -> String {
        if self.parts.is_empty() {
            word.to_string()
        } else {
            self.locale.mid_sentence(word)
        }
    }

    /// A localized word, cased for its position.
    fn word(&mut self, msgid: &str) {
        let clause = self.cased(self.locale.pgettext(CONTEXT, msgid));
        self.parts.push(clause);
    }

    /// A localized word followed by a value that is never recased.
    fn word_with(&mut self, msgid: &str, value: &str) {
        let word = self.cased(self.locale.pgettext(CONTEXT, msgid));
        self.parts.push(format!("{word} {value}"));
    }

    fn finish(self) -> String {
        self.parts.join(", ")
    }
}

/// Format issue numbering as one localized phrase.
///
/// The number, when followed by an alternate number, renders as
/// "3 (4)"; an alternate number alone stands in for the number. A
/// special issue without a number reads "Numéro hors-série" as a single
/// clause. Blank fields count as absent, and an entirely empty record
/// gives an empty string.
pub fn format_numbering(
    info: &NumberingInfo,
    options: &NumberingOptions,
    opts: &RenderOptions,
) -> String {
    let html = opts.html();
    let number = match (present(&info.number), present(&info.alt_number)) {
        (Some(number), Some(alt)) => Some(format!("{number} ({alt})")),
        (Some(number), None) => Some(number.to_string()),
        (None, Some(alt)) => Some(alt.to_string()),
        (None, None) => None,
    };
    let number_type = present(&info.number_type).map(NumberType::from_code);

    let mut clauses = Clauses::new(opts.locale);
    if let Some(volume) = present(&info.volume) {
        clauses.word_with(volume_word(options), volume);
    }
    if let Some(number) = &number {
        clauses.word_with(number_word(options, html), number);
    }
    match &number_type {
        Some(NumberType::SpecialIssue) if number.is_none() => {
            clauses.word(special_issue_word(options, html));
        }
        Some(number_type) => clauses.word(type_word(number_type)),
        None => {}
    }
    if let Some(period) = present(&info.publication_period) {
        let period = clauses.cased(period);
        clauses.parts.push(period);
    }
    clauses.finish()
}

/// Format a publication period from a `pub` element.
///
/// `annee` and `periode` children are joined in document order: a year
/// then a period gives "2012, Hiver", two periods "Janvier–Février", two
/// years "2014–2015" and a period then a year "Hiver 2012". Each part is
/// translated on its own.
pub fn format_publication_period(pub_element: &Element, locale: &Locale) -> Option<String> {
    let mut result = String::new();
    let mut previous_is_year: Option<bool> = None;

    for child in pub_element.child_elements() {
        let is_year = match child.name() {
            "annee" => true,
            "periode" => false,
            _ => continue,
        };
        let Some(text) = child.text().map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        let part = locale.pgettext(CONTEXT, text);
        match (previous_is_year, is_year) {
            (None, _) => {}
            (Some(true), false) => result.push_str(", "),
            (Some(false), false) | (Some(true), true) => result.push('–'),
            (Some(false), true) => result.push(' '),
        }
        result.push_str(part);
        previous_is_year = Some(is_year);
    }

    (!result.is_empty()).then_some(result)
}

/// Read the numbering of a `numero` element.
pub fn extract_numbering(numero: &Element, locale: &Locale) -> NumberingInfo {
    let numbers = numero.find_all("nonumero");
    let number_text = |index: usize| {
        numbers
            .get(index)
            .map(|n| n.itertext().trim().to_string())
            .filter(|n| !n.is_empty())
    };
    NumberingInfo {
        volume: numero
            .get_itertext("volume")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
        number: number_text(0),
        alt_number: number_text(1),
        number_type: numero.attr("typenumero").map(str::to_string),
        publication_period: numero
            .find("pub")
            .and_then(|pub_element| format_publication_period(pub_element, locale)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erudit_core::RenderMode;
    use erudit_dom::Document;

    fn info(volume: &str, number: &str, number_type: &str, period: &str) -> NumberingInfo {
        let some = |s: &str| (!s.is_empty()).then(|| s.to_string());
        NumberingInfo {
            volume: some(volume),
            number: some(number),
            alt_number: None,
            number_type: some(number_type),
            publication_period: some(period),
        }
    }

    fn english() -> Locale {
        Locale::load("en").unwrap()
    }

    const FULL: NumberingOptions = NumberingOptions { abbreviated: false };
    const SHORT: NumberingOptions = NumberingOptions { abbreviated: true };

    #[test]
    fn test_french_special_issue_with_volume() {
        let plain = RenderOptions::plain();
        let value = info("32", "", "hs", "2008");
        assert_eq!(
            format_numbering(&value, &FULL, &plain),
            "Volume 32, numéro hors-série, 2008"
        );
        assert_eq!(
            format_numbering(&value, &SHORT, &plain),
            "Vol. 32, n° hors-série, 2008"
        );
        assert_eq!(
            format_numbering(&value, &SHORT, &RenderOptions::default()),
            "Vol. 32, n<sup>o</sup> hors-série, 2008"
        );
    }

    #[test]
    fn test_french_templates() {
        let plain = RenderOptions::plain();
        assert_eq!(
            format_numbering(&info("52", "214", "supp", "Printemps 2009"), &FULL, &plain),
            "Volume 52, numéro 214, supplément, printemps 2009"
        );
        assert_eq!(
            format_numbering(&info("", "125", "index", "1986"), &FULL, &plain),
            "Numéro 125, index, 1986"
        );
        assert_eq!(
            format_numbering(&info("", "", "hs", "2001"), &FULL, &plain),
            "Numéro hors-série, 2001"
        );
        assert_eq!(
            format_numbering(&info("", "", "index", "1997"), &FULL, &plain),
            "Index, 1997"
        );
        assert_eq!(
            format_numbering(&info("", "", "", "Hiver 2012"), &FULL, &plain),
            "Hiver 2012"
        );
    }

    #[test]
    fn test_english_templates() {
        let locale = english();
        let opts = RenderOptions::new(&locale, RenderMode::Plain);
        let cases = [
            (info("56", "3-4", "", "September–December 2015"), "Volume 56, Number 3-4, September–December 2015"),
            (info("", "", "hs", "2001"), "Special Issue, 2001"),
            (info("", "", "index", "1997"), "Index, 1997"),
            (info("", "211", "", "January–February 2001"), "Number 211, January–February 2001"),
            (info("", "125", "index", "1986"), "Number 125, Index, 1986"),
            (info("", "110", "supp", "Winter 2012"), "Number 110, Supplement, Winter 2012"),
            (info("73", "", "", "2007"), "Volume 73, 2007"),
            (info("52", "214", "supp", "Spring 2009"), "Volume 52, Number 214, Supplement, Spring 2009"),
            (info("32", "", "hs", "2008"), "Volume 32, Special Issue, 2008"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_numbering(&value, &FULL, &opts), expected);
        }
    }

    #[test]
    fn test_numbers_keep_their_case() {
        assert_eq!(
            format_numbering(&info("IV", "3A", "", ""), &SHORT, &RenderOptions::plain()),
            "Vol. IV, n° 3A"
        );
    }

    #[test]
    fn test_alternate_number() {
        let plain = RenderOptions::plain();
        let mut value = info("", "3", "", "");
        value.alt_number = Some("4".into());
        assert_eq!(format_numbering(&value, &FULL, &plain), "Numéro 3 (4)");
        value.number = None;
        assert_eq!(format_numbering(&value, &FULL, &plain), "Numéro 4");
    }

    #[test]
    fn test_special_issue_with_number() {
        assert_eq!(
            format_numbering(&info("", "2", "hs", "2010"), &FULL, &RenderOptions::plain()),
            "Numéro 2, hors-série, 2010"
        );
    }

    #[test]
    fn test_unknown_type_is_shown_as_is() {
        assert_eq!(
            format_numbering(&info("5", "", "double", ""), &FULL, &RenderOptions::plain()),
            "Volume 5, double"
        );
    }

    #[test]
    fn test_empty_numbering() {
        assert_eq!(
            format_numbering(&NumberingInfo::default(), &FULL, &RenderOptions::plain()),
            ""
        );
        assert_eq!(
            format_numbering(&info(" ", "", "", ""), &FULL, &RenderOptions::plain()),
            ""
        );
    }

    fn period(xml: &str, locale: &Locale) -> Option<String> {
        let doc = Document::parse(xml).unwrap();
        format_publication_period(doc.root(), locale)
    }

    #[test]
    fn test_publication_period() {
        let fr = Locale::default();
        assert_eq!(
            period("<pub><annee>2012</annee><periode>Hiver</periode></pub>", &fr).as_deref(),
            Some("2012, Hiver")
        );
        assert_eq!(
            period("<pub><periode>Janvier</periode><periode>Février</periode><annee>2001</annee></pub>", &fr).as_deref(),
            Some("Janvier–Février 2001")
        );
        assert_eq!(
            period("<pub><annee>2014</annee><annee>2015</annee></pub>", &fr).as_deref(),
            Some("2014–2015")
        );
        assert_eq!(period("<pub/>", &fr), None);
    }

    #[test]
    fn test_publication_period_is_translated() {
        assert_eq!(
            period(
                "<pub><periode>Septembre</periode><periode>Décembre</periode><annee>2015</annee></pub>",
                &english()
            )
            .as_deref(),
            Some("September–December 2015")
        );
    }

    #[test]
    fn test_extract_numbering() {
        let doc = Document::parse(
            r#"<numero typenumero="supp">
                <volume>52</volume>
                <nonumero>214</nonumero>
                <nonumero>215</nonumero>
                <pub><periode>Printemps</periode><annee>2009</annee></pub>
            </numero>"#,
        )
        .unwrap();
        let value = extract_numbering(doc.root(), &Locale::default());
        assert_eq!(value.volume.as_deref(), Some("52"));
        assert_eq!(value.number.as_deref(), Some("214"));
        assert_eq!(value.alt_number.as_deref(), Some("215"));
        assert_eq!(value.number_type.as_deref(), Some("supp"));
        assert_eq!(value.publication_period.as_deref(), Some("Printemps 2009"));
        assert_eq!(
            format_numbering(&value, &FULL, &RenderOptions::plain()),
            "Volume 52, numéro 214 (215), supplément, printemps 2009"
        );
    }
}
