/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author lists in citation styles.

use super::format_name;
use erudit_core::{Locale, Person};

/// Citation style for author lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CitationStyle {
    /// Display names joined with commas and a final conjunction.
    #[default]
    Default,
    Mla,
    Apa,
    Chicago,
}

/// Name parts the citation styles work from.
pub trait NameParts {
    fn firstname(&self) -> Option<&str>;
    fn lastname(&self) -> Option<&str>;
    fn othername(&self) -> Option<&str>;
    fn organization(&self) -> Option<&str>;

    fn pseudonym(&self) -> Option<String> {
        None
    }

    /// Name used by [`CitationStyle::Default`].
    fn display_name(&self, _locale: &Locale) -> String {
        let parts: Vec<&str> = [self.firstname(), self.othername(), self.lastname()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            return self
                .organization()
                .map(str::to_string)
                .or_else(|| self.pseudonym())
                .unwrap_or_default();
        }
        parts.join(" ")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

impl NameParts for Person {
    fn firstname(&self) -> Option<&str> {
        non_empty(self.firstname.as_deref())
    }

    fn lastname(&self) -> Option<&str> {
        non_empty(self.lastname.as_deref())
    }

    fn othername(&self) -> Option<&str> {
        non_empty(self.othername.as_deref())
    }

    fn organization(&self) -> Option<&str> {
        non_empty(self.organization.as_deref())
    }

    fn pseudonym(&self) -> Option<String> {
        let pseudo = self.pseudo.as_deref()?;
        let name = [pseudo.firstname(), pseudo.othername(), pseudo.lastname()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    fn display_name(&self, locale: &Locale) -> String {
        format_name(self, locale, true)
    }
}

fn is_blank<P: NameParts + ?Sized>(person: &P) -> bool {
    person.firstname().is_none()
        && person.lastname().is_none()
        && person.othername().is_none()
        && person.organization().is_none()
        && person.pseudonym().is_none()
}

/// Initials of a given name: "Jean-Pierre" → "J.-P.", "Mary Ann" → "M. A.".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.split('-')
                .filter_map(|segment| segment.chars().next())
                .map(|first| format!("{first}."))
                .collect::<Vec<_>>()
                .join("-")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name used when a person lacks a first or a last name.
fn degraded<P: NameParts + ?Sized>(person: &P, given: Option<String>) -> String {
    match (person.lastname(), given) {
        (Some(last), _) => last.to_string(),
        (None, Some(given)) => given,
        (None, None) => person
            .organization()
            .map(str::to_string)
            .or_else(|| person.pseudonym())
            .unwrap_or_default(),
    }
}

/// "Last, Given" when both parts exist, else whichever exists.
fn inverted<P: NameParts + ?Sized>(person: &P, given: Option<String>) -> String {
    match (person.lastname(), given) {
        (Some(last), Some(given)) => format!("{last}, {given}"),
        (_, given) => degraded(person, given),
    }
}

/// "Given Last" when both parts exist, else whichever exists.
fn direct<P: NameParts + ?Sized>(person: &P, given: Option<String>) -> String {
    match (person.lastname(), given) {
        (Some(last), Some(given)) => format!("{given} {last}"),
        (_, given) => degraded(person, given),
    }
}

fn mla_given<P: NameParts + ?Sized>(person: &P) -> Option<String> {
    let first = person.firstname()?;
    Some(match person.othername() {
        Some(other) => format!("{first} {}", initials(other)),
        None => first.to_string(),
    })
}

fn apa_given<P: NameParts + ?Sized>(person: &P) -> Option<String> {
    let given: Vec<String> = [person.firstname(), person.othername()]
        .into_iter()
        .flatten()
        .map(initials)
        .filter(|i| !i.is_empty())
        .collect();
    (!given.is_empty()).then(|| given.join(" "))
}

fn chicago_given<P: NameParts + ?Sized>(person: &P) -> Option<String> {
    let given: Vec<&str> = [person.firstname(), person.othername()]
        .into_iter()
        .flatten()
        .collect();
    (!given.is_empty()).then(|| given.join(" "))
}

/// Join with `delimiter`, using `last_delimiter` before the final item.
fn join_with_last(items: &[String], delimiter: &str, last_delimiter: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}{}{}", init.join(delimiter), last_delimiter, last),
    }
}

fn format_default<P: NameParts>(persons: &[&P], locale: &Locale) -> String {
    let names: Vec<String> = persons
        .iter()
        .map(|p| p.display_name(locale))
        .filter(|name| !name.is_empty())
        .collect();
    join_with_last(&names, ", ", &format!(" {} ", locale.and_term()))
}

fn format_mla<P: NameParts>(persons: &[&P], locale: &Locale) -> String {
    let result = match persons {
        [] => return String::new(),
        [only] => inverted(*only, mla_given(*only)),
        [first, second] => format!(
            "{} {} {}",
            inverted(*first, mla_given(*first)),
            locale.and_term(),
            direct(*second, mla_given(*second))
        ),
        [first, ..] => format!("{}, {}", inverted(*first, mla_given(*first)), locale.et_al()),
    };
    if result.is_empty() || result.ends_with('.') {
        result
    } else {
        format!("{result}.")
    }
}

fn format_apa<P: NameParts>(persons: &[&P]) -> String {
    let names: Vec<String> = persons
        .iter()
        .map(|p| inverted(*p, apa_given(*p)))
        .filter(|name| !name.is_empty())
        .collect();
    join_with_last(&names, ", ", " & ")
}

fn format_chicago<P: NameParts>(persons: &[&P], locale: &Locale) -> String {
    let names: Vec<String> = persons
        .iter()
        .map(|p| inverted(*p, chicago_given(*p)))
        .filter(|name| !name.is_empty())
        .collect();
    join_with_last(&names, ", ", &format!(" {} ", locale.and_term()))
}

/// Format an author list in `style`. Persons with nothing to show are
/// skipped; an empty list gives an empty string.
pub fn format_authors<P: NameParts>(style: CitationStyle, persons: &[P], locale: &Locale) -> String {
    let persons: Vec<&P> = persons.iter().filter(|p| !is_blank(*p)).collect();
    match style {
        CitationStyle::Default => format_default(&persons, locale),
        CitationStyle::Mla => format_mla(&persons, locale),
        CitationStyle::Apa => format_apa(&persons),
        CitationStyle::Chicago => format_chicago(&persons, locale),
    }
}
