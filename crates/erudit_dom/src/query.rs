/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A small path language for locating elements.
//!
//! Paths are sequences of steps separated by `/` (direct child) or `//`
//! (any descendant). The first step is always searched among all
//! descendants of the scope, never the scope itself. Each step is an
//! element name or `*`, optionally followed by one attribute predicate,
//! `[@name]` or `[@name="value"]`.
//!
//! ```text
//! titre
//! grauteur//auteur
//! infoarticle/idpublic[@scheme="doi"]
//! surtitreparal[@lang]
//! ```
//!
//! A path that does not follow this grammar matches nothing.

use crate::document::Element;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Has(String),
    Equals(String, String),
}

impl Predicate {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Predicate::Has(name) => element.attr(name).is_some(),
            Predicate::Equals(name, value) => element.attr(name) == Some(value.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: Option<String>,
    predicate: Option<Predicate>,
}

impl Step {
    fn matches(&self, element: &Element) -> bool {
        self.name.as_deref().map_or(true, |name| element.name() == name)
            && self.predicate.as_ref().map_or(true, |p| p.matches(element))
    }
}

/// A compiled path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    steps: Vec<Step>,
}

impl Query {
    /// Compile `path`, returning `None` when it is not a valid path.
    pub fn parse(path: &str) -> Option<Self> {
        let mut steps = Vec::new();
        let mut rest = path.trim();
        let mut axis = Axis::Descendant;
        if let Some(stripped) = rest.strip_prefix("//") {
            rest = stripped;
        }
        loop {
            let (step, remaining) = parse_step(rest, axis)?;
            steps.push(step);
            if remaining.is_empty() {
                break;
            }
            if let Some(r) = remaining.strip_prefix("//") {
                axis = Axis::Descendant;
                rest = r;
            } else if let Some(r) = remaining.strip_prefix('/') {
                axis = Axis::Child;
                rest = r;
            } else {
                return None;
            }
        }
        Some(Self { steps })
    }

    /// Every match below `scope`, in document order, without duplicates.
    pub fn select<'a>(&self, scope: &'a Element) -> Vec<&'a Element> {
        let mut context: Vec<&'a Element> = vec![scope];
        for step in &self.steps {
            let mut seen: HashSet<*const Element> = HashSet::new();
            let mut next = Vec::new();
            for element in context {
                let candidates: Box<dyn Iterator<Item = &'a Element> + 'a> = match step.axis {
                    Axis::Child => Box::new(element.child_elements()),
                    Axis::Descendant => Box::new(element.descendants()),
                };
                for candidate in candidates.filter(|c| step.matches(c)) {
                    if seen.insert(candidate as *const Element) {
                        next.push(candidate);
                    }
                }
            }
            if next.is_empty() {
                return next;
            }
            context = next;
        }
        in_document_order(scope, context)
    }

    pub fn first<'a>(&self, scope: &'a Element) -> Option<&'a Element> {
        self.select(scope).into_iter().next()
    }
}

fn in_document_order<'a>(scope: &'a Element, found: Vec<&'a Element>) -> Vec<&'a Element> {
    if found.len() < 2 {
        return found;
    }
    let wanted: HashSet<*const Element> = found.iter().map(|e| *e as *const Element).collect();
    scope
        .descendants()
        .filter(|e| wanted.contains(&(*e as *const Element)))
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn parse_step(input: &str, axis: Axis) -> Option<(Step, &str)> {
    let (name, rest) = if let Some(rest) = input.strip_prefix('*') {
        (None, rest)
    } else {
        let end = input
            .find(|c: char| !is_name_char(c))
            .unwrap_or(input.len());
        if end == 0 {
            return None;
        }
        (Some(input[..end].to_string()), &input[end..])
    };

    let (predicate, rest) = match rest.strip_prefix("[@") {
        Some(body) => {
            let close = body.find(']')?;
            (Some(parse_predicate(&body[..close])?), &body[close + 1..])
        }
        None => (None, rest),
    };

    Some((
        Step {
            axis,
            name,
            predicate,
        },
        rest,
    ))
}

fn parse_predicate(body: &str) -> Option<Predicate> {
    match body.split_once('=') {
        None => {
            let name = body.trim();
            (!name.is_empty() && name.chars().all(is_name_char))
                .then(|| Predicate::Has(name.to_string()))
        }
        Some((name, value)) => {
            let name = name.trim();
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))?;
            (!name.is_empty() && name.chars().all(is_name_char))
                .then(|| Predicate::Equals(name.to_string(), unquoted.to_string()))
        }
    }
}
