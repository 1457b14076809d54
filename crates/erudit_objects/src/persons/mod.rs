/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Person extraction and display names.
//!
//! Authors, editors and members are all person-shaped elements: one or
//! more `nompers` (one of which may be a pseudonym), or an organization
//! name `nomorg` with optional `membre` children.

pub mod styles;


pub use styles::{format_authors, CitationStyle, NameParts};

use crate::render_element;
use erudit_core::{EditorKind, Locale, Person, RenderOptions};
use erudit_dom::{Element, RenderSettings};
use indexmap::IndexMap;

const PSEUDONYM: &str = "pseudonyme";

fn settings() -> RenderSettings {
    RenderSettings::default().with_unwrap(["marquage"])
}

fn is_pseudonym(nompers: &Element) -> bool {
    nompers.attr("typenompers") == Some(PSEUDONYM)
}

fn part(scope: &Element, name: &str, opts: &RenderOptions) -> Option<String> {
    render_element(scope.find(name), &settings(), opts)
}

/// Read the name parts of a `nompers` element.
fn name_parts(nompers: &Element, opts: &RenderOptions) -> Person {
    let suffixes: Vec<String> = nompers
        .find_all("suffixe")
        .into_iter()
        .filter_map(|suffix| render_element(Some(suffix), &settings(), opts))
        .collect();
    Person {
        firstname: part(nompers, "prenom", opts),
        othername: part(nompers, "autreprenom", opts),
        lastname: part(nompers, "nomfamille", opts),
        suffix: (!suffixes.is_empty()).then(|| suffixes.join(", ")),
        ..Default::default()
    }
}

/// Read a person-shaped element (`auteur`, `redacteurchef`, `membre`...).
pub fn extract_person(element: &Element, opts: &RenderOptions) -> Person {
    let names: Vec<&Element> = element.children_named("nompers").collect();
    let main = names
        .iter()
        .copied()
        .find(|n| !is_pseudonym(n))
        .or_else(|| names.first().copied());

    let mut person = main.map(|n| name_parts(n, opts)).unwrap_or_default();

    if names.len() > 1 {
        person.pseudo = names
            .iter()
            .copied()
            .find(|n| is_pseudonym(n) && !main.is_some_and(|m| std::ptr::eq(m, *n)))
            .map(|n| Box::new(name_parts(n, opts)));
    }

    person.organization = render_element(element.child("nomorg"), &settings(), opts);
    person.members = element
        .children_named("membre")
        .map(|member| extract_person(member, opts))
        .collect();
    person.affiliations = element
        .children_named("affiliation")
        .filter_map(|affiliation| part(affiliation, "alinea", opts))
        .collect();
    person.email = erudit_dom::render::to_text(
        element.find("courriel/liensimple"),
        &RenderSettings::default(),
    );

    let mut role = IndexMap::new();
    for function in element.children_named("fonction") {
        if let (Some(lang), Some(text)) = (
            function.attr("lang"),
            render_element(Some(function), &settings(), opts),
        ) {
            role.insert(lang.to_string(), text);
        }
    }
    person.role = role;

    person.typerc = element
        .attr("typerc")
        .and_then(|typerc| typerc.parse::<EditorKind>().ok());
    person.themes = element
        .attr("idrefs")
        .map(|idrefs| idrefs.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    person
}

/// Read every element matching `path` below `scope` as a person.
pub fn extract_persons(scope: &Element, path: &str, opts: &RenderOptions) -> Vec<Person> {
    scope
        .find_all(path)
        .into_iter()
        .map(|element| extract_person(element, opts))
        .collect()
}

fn full_name(person: &Person) -> String {
    [&person.firstname, &person.othername, &person.lastname]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name of a person or organization.
///
/// Organizations list their members in parentheses, by name only.
/// Persons render as "first other last", then the suffixes when
/// `with_suffixes` is set, then the pseudonym introduced by the catalog's "alias". Never fails:
/// a person with nothing to show renders as an empty string.
pub fn format_name(person: &Person, locale: &Locale, with_suffixes: bool) -> String {
    if let Some(organization) = &person.organization {
        let members: Vec<String> = person
            .members
            .iter()
            .map(full_name)
            .filter(|name| !name.is_empty())
            .collect();
        if members.is_empty() {
            return organization.clone();
        }
        return format!("{} ({})", organization, members.join(", "));
    }

    let mut result = full_name(person);
    if with_suffixes {
        if let Some(suffix) = person.suffix.as_deref().filter(|s| !s.is_empty()) {
            if result.is_empty() {
                result = suffix.to_string();
            } else {
                result = format!("{result}, {suffix}");
            }
        }
    }

    if let Some(pseudo) = &person.pseudo {
        let alias = format_name(pseudo, locale, with_suffixes);
        if !alias.is_empty() {
            if result.is_empty() {
                return alias;
            }
            result = format!("{}, {} {}", result, locale.alias(), alias);
        }
    }
    result
}
