/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use erudit_objects::Journal;

#[test]
fn test_title() {
    assert_eq!(
        journal().get_title(&plain()).unwrap(),
        "Management international / International Management / Gestión Internacional"
    );
}

#[test]
fn test_titles_outside_declared_languages_are_equivalents() {
    let journal = Journal::from_xml(
        r#"<revue lang="fr"><titrerev>Revue</titrerev><titrerevparal lang="en">Review</titrerevparal></revue>"#,
    )
    .unwrap();
    let titles = journal.get_titles(&plain()).unwrap();
    assert!(titles.paral.is_empty());
    assert_eq!(titles.equivalent.len(), 1);
    assert_eq!(journal.get_title(&plain()).unwrap(), "Revue / Review");
}

#[test]
fn test_publication_years() {
    let journal = journal();
    assert_eq!(journal.get_publication_years(), vec!["2009", "2012", "2015"]);
    assert_eq!(journal.get_first_publication_year().as_deref(), Some("2009"));
    assert_eq!(journal.get_last_publication_year().as_deref(), Some("2015"));
    assert_eq!(journal.get_publication_period().as_deref(), Some("2009 - 2015"));
}

#[test]
fn test_publication_period_edge_cases() {
    let single = Journal::from_xml(r#"<revue><annee valeur="2001"/></revue>"#).unwrap();
    assert_eq!(single.get_publication_period().as_deref(), Some("2001"));
    let none = Journal::from_xml("<revue/>").unwrap();
    assert_eq!(none.get_publication_period(), None);
    assert_eq!(none.get_first_publication_year(), None);
}

#[test]
fn test_notes() {
    let notes = journal().get_notes(&html());
    assert_eq!(notes.keys().collect::<Vec<_>>(), vec!["fr", "en"]);
    assert_eq!(
        notes["fr"],
        vec!["Revue <em>bilingue</em>.", "Deuxième note."]
    );
    assert_eq!(notes["en"], vec!["An English note."]);
    assert_eq!(journal().get_notes(&plain())["fr"][0], "Revue bilingue.");
}

#[test]
fn test_issue_pids() {
    let journal = journal();
    assert_eq!(
        journal.get_published_issues_pids(),
        vec!["erudit:mi1871", "erudit:mi115", "erudit:mi1234"]
    );
    assert_eq!(
        journal.get_last_published_issue_pid().as_deref(),
        Some("erudit:mi1871")
    );
}
