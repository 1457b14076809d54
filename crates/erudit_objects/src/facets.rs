/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Capabilities shared by several entity types.
//!
//! [`Periodical`] covers identifiers and numbering of the issue an entity
//! belongs to; [`Copyrighted`] covers copyright notices. Entities hand
//! out a facet borrowing their root element and re-export its getters.

use crate::numbering::{extract_numbering, format_numbering, format_publication_period};
use crate::{render_element, NumberingOptions};
use erudit_core::{CopyrightNotice, Copyrights, Locale, NumberingInfo, RenderOptions};
use erudit_dom::{Element, RenderSettings};

/// Issue identifiers, numbering and publication period.
#[derive(Debug, Clone, Copy)]
pub struct Periodical<'a> {
    root: &'a Element,
}

impl<'a> Periodical<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { root }
    }

    pub fn get_issn(&self) -> Option<String> {
        self.revue()?.get_text("idissn")
    }

    /// Electronic ISSN.
    pub fn get_issn_num(&self) -> Option<String> {
        self.revue()?.get_text("idissnnum")
    }

    /// ISBN of the issue, the 13-digit form when there is one.
    pub fn get_isbn(&self) -> Option<String> {
        self.numero()?.get_text_from_tags(&["idisbn13", "idisbn"])
    }

    pub fn get_isbn_num(&self) -> Option<String> {
        self.numero()?
            .get_text_from_tags(&["idisbnnum13", "idisbnnum"])
    }

    /// The `typenumero` code of the issue (`hs`, `supp`, `index`...).
    pub fn get_publication_type(&self) -> Option<String> {
        self.numero()?.attr("typenumero").map(str::to_string)
    }

    pub fn get_publication_period(&self, locale: &Locale) -> Option<String> {
        let pub_element = self.numero()?.find("pub")?;
        format_publication_period(pub_element, locale)
    }

    pub fn get_volume_numbering(&self, locale: &Locale) -> Option<NumberingInfo> {
        self.numero().map(|numero| extract_numbering(numero, locale))
    }

    /// Issue numbering as a phrase, or `None` when there is nothing to show.
    pub fn get_formatted_volume_numbering(
        &self,
        options: &NumberingOptions,
        opts: &RenderOptions,
    ) -> Option<String> {
        let info = self.get_volume_numbering(opts.locale)?;
        let formatted = format_numbering(&info, options, opts);
        (!formatted.is_empty()).then_some(formatted)
    }

    fn revue(&self) -> Option<&'a Element> {
        self.root.find_self_or("revue")
    }

    fn numero(&self) -> Option<&'a Element> {
        self.root.find_self_or("numero")
    }
}

/// Copyright notices (`droitsauteur`) and declarations (`copyright`).
#[derive(Debug, Clone, Copy)]
pub struct Copyrighted<'a> {
    root: &'a Element,
}

impl<'a> Copyrighted<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { root }
    }

    /// Every `droitsauteur`: a licence link when it holds one, else its text.
    pub fn get_droitsauteur(&self) -> Vec<CopyrightNotice> {
        self.root
            .find_all("droitsauteur")
            .into_iter()
            .map(|notice| match notice.find("liensimple") {
                Some(link) => CopyrightNotice::Link {
                    href: link.attr("href").unwrap_or_default().to_string(),
                    img: link
                        .find("objetmedia//image")
                        .and_then(|image| image.attr("href"))
                        .map(str::to_string),
                },
                None => CopyrightNotice::Text {
                    text: notice.itertext(),
                },
            })
            .collect()
    }

    /// Owner named by the first notice.
    pub fn get_droitsauteur_org(&self) -> Option<String> {
        self.root.get_text("droitsauteur/nomorg")
    }

    /// The `copyright` declaration, with its label in `language` when
    /// available.
    pub fn get_copyrights(&self, language: &str, opts: &RenderOptions) -> Option<Copyrights> {
        let copyright = self.root.find_self_or("copyright")?;
        let settings = RenderSettings::default();

        let label = copyright
            .child_elements()
            .find(|child| {
                matches!(
                    child.name(),
                    "contributiondeclaration" | "copyrightdeclaration"
                )
            })
            .and_then(|declaration| {
                declaration
                    .find(&format!(r#"label[@lang="{language}"]"#))
                    .or_else(|| declaration.child("label"))
            });

        let names = copyright
            .children_named("contribution")
            .map(|contribution| {
                contribution_name_parts(contribution)
                    .into_iter()
                    .filter_map(|part| render_element(Some(part), &settings, opts))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|name| !name.is_empty())
            .collect();

        Some(Copyrights {
            label: render_element(label, &settings, opts),
            names,
            year: render_element(copyright.child("year"), &settings, opts),
        })
    }
}

/// Name parts of a copyright holder, prefix first.
fn contribution_name_parts(contribution: &Element) -> Vec<&Element> {
    if let Some(name) = contribution.find("artificialperson/name") {
        return vec![name];
    }
    let Some(person) = contribution.find("physicalperson/personname") else {
        return Vec::new();
    };
    [
        person.find("personnameprefix/name"),
        person.child("firstname"),
        person.child("familyname"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// "{label} © {names}, {year}", names joined with the catalog conjunction.
pub fn format_copyrights(copyrights: &Copyrights, locale: &Locale) -> String {
    let names = match copyrights.names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} {} {}", init.join(", "), locale.and_term(), last),
    };
    let mut out = match copyrights.label.as_deref() {
        Some(label) => format!("{label} ©"),
        None => "©".to_string(),
    };
    if !names.is_empty() {
        out.push(' ');
        out.push_str(&names);
    }
    if let Some(year) = &copyrights.year {
        out.push_str(", ");
        out.push_str(year);
    }
    out
}

/// Getters re-exported from the [`Periodical`] and [`Copyrighted`] facets.
macro_rules! delegate_facets {
    ($entity:ty) => {
        impl $entity {
            pub fn get_issn(&self) -> Option<String> {
                self.periodical().get_issn()
            }

            pub fn get_issn_num(&self) -> Option<String> {
                self.periodical().get_issn_num()
            }

            pub fn get_isbn(&self) -> Option<String> {
                self.periodical().get_isbn()
            }

            pub fn get_isbn_num(&self) -> Option<String> {
                self.periodical().get_isbn_num()
            }

            pub fn get_publication_type(&self) -> Option<String> {
                self.periodical().get_publication_type()
            }

            pub fn get_publication_period(
                &self,
                locale: &erudit_core::Locale,
            ) -> Option<String> {
                self.periodical().get_publication_period(locale)
            }

            pub fn get_volume_numbering(
                &self,
                locale: &erudit_core::Locale,
            ) -> Option<erudit_core::NumberingInfo> {
                self.periodical().get_volume_numbering(locale)
            }

            pub fn get_formatted_volume_numbering(
                &self,
                options: &$crate::NumberingOptions,
                opts: &erudit_core::RenderOptions,
            ) -> Option<String> {
                self.periodical().get_formatted_volume_numbering(options, opts)
            }

            pub fn get_droitsauteur(&self) -> Vec<erudit_core::CopyrightNotice> {
                self.copyrighted().get_droitsauteur()
            }

            pub fn get_droitsauteur_org(&self) -> Option<String> {
                self.copyrighted().get_droitsauteur_org()
            }

            pub fn get_copyrights(
                &self,
                language: &str,
                opts: &erudit_core::RenderOptions,
            ) -> Option<erudit_core::Copyrights> {
                self.copyrighted().get_copyrights(language, opts)
            }
        }
    };
}

pub(crate) use delegate_facets;

#[cfg(test)]
mod tests {
    use super::*;
    use erudit_dom::Document;

    const ISSUE: &str = r#"<article>
        <admin>
            <revue id="ritpu"><idissn>1708-7570</idissn><idissnnum>1708-7570</idissnnum></revue>
            <numero id="ritpu0326" typenumero="hs">
                <volume>3</volume>
                <pub><annee>2006</annee></pub>
                <idisbn>2-89578-037-4</idisbn>
                <idisbnnum13>978-2-89578-037-0</idisbnnum13>
            </numero>
            <droitsauteur>Tous droits réservés © <nomorg>CRÉPUQ</nomorg>,</droitsauteur>
            <droitsauteur>
                <liensimple href="http://creativecommons.org/licenses/by-nc-sa/3.0/deed.fr_CA">
                    <objetmedia><image href="http://i.creativecommons.org/l/by-nc-sa/3.0/88x31.png"/></objetmedia>
                </liensimple>
            </droitsauteur>
        </admin>
    </article>"#;

    #[test]
    fn test_periodical_identifiers() {
        let doc = Document::parse(ISSUE).unwrap();
        let periodical = Periodical::new(doc.root());
        assert_eq!(periodical.get_issn().as_deref(), Some("1708-7570"));
        assert_eq!(periodical.get_isbn().as_deref(), Some("2-89578-037-4"));
        assert_eq!(
            periodical.get_isbn_num().as_deref(),
            Some("978-2-89578-037-0")
        );
        assert_eq!(periodical.get_publication_type().as_deref(), Some("hs"));
    }

    #[test]
    fn test_isbn_prefers_thirteen_digits() {
        let doc = Document::parse(
            "<numero><idisbn>2-89578-037-4</idisbn><idisbn13>978-2-924298-19-0</idisbn13></numero>",
        )
        .unwrap();
        assert_eq!(
            Periodical::new(doc.root()).get_isbn().as_deref(),
            Some("978-2-924298-19-0")
        );
    }

    #[test]
    fn test_periodical_numbering() {
        let doc = Document::parse(ISSUE).unwrap();
        let periodical = Periodical::new(doc.root());
        let opts = RenderOptions::plain();
        assert_eq!(
            periodical.get_publication_period(opts.locale).as_deref(),
            Some("2006")
        );
        assert_eq!(
            periodical
                .get_formatted_volume_numbering(&NumberingOptions::default(), &opts)
                .as_deref(),
            Some("Volume 3, numéro hors-série, 2006")
        );
    }

    #[test]
    fn test_periodical_without_issue() {
        let doc = Document::parse("<article/>").unwrap();
        let periodical = Periodical::new(doc.root());
        assert_eq!(periodical.get_issn(), None);
        assert_eq!(periodical.get_volume_numbering(&Locale::default()), None);
        assert_eq!(
            periodical.get_formatted_volume_numbering(
                &NumberingOptions::default(),
                &RenderOptions::plain()
            ),
            None
        );
    }

    #[test]
    fn test_droitsauteur() {
        let doc = Document::parse(ISSUE).unwrap();
        let copyrighted = Copyrighted::new(doc.root());
        let notices = copyrighted.get_droitsauteur();
        assert_eq!(
            notices[0],
            CopyrightNotice::Text {
                text: "Tous droits réservés © CRÉPUQ,".into()
            }
        );
        assert_eq!(
            notices[1],
            CopyrightNotice::Link {
                href: "http://creativecommons.org/licenses/by-nc-sa/3.0/deed.fr_CA".into(),
                img: Some("http://i.creativecommons.org/l/by-nc-sa/3.0/88x31.png".into()),
            }
        );
        assert_eq!(copyrighted.get_droitsauteur_org().as_deref(), Some("CRÉPUQ"));
    }

    const COPYRIGHT: &str = r#"<article><copyright>
        <copyrightdeclaration>
            <label lang="fr">Tous droits réservés</label>
            <label lang="en">All rights reserved</label>
        </copyrightdeclaration>
        <contribution><artificialperson><name>Revue <marquage typemarq="italique">Foo</marquage></name></artificialperson></contribution>
        <contribution><physicalperson><personname>
            <firstname>Jean</firstname><familyname>Tremblay</familyname>
            <personnameprefix><name>Dr</name></personnameprefix>
        </personname></physicalperson></contribution>
        <contribution><artificialperson><name>Société Bar</name></artificialperson></contribution>
        <year>1999</year>
    </copyright></article>"#;

    #[test]
    fn test_copyrights() {
        let doc = Document::parse(COPYRIGHT).unwrap();
        let copyrighted = Copyrighted::new(doc.root());
        let copyrights = copyrighted
            .get_copyrights("en", &RenderOptions::plain())
            .unwrap();
        assert_eq!(copyrights.label.as_deref(), Some("All rights reserved"));
        assert_eq!(
            copyrights.names,
            vec!["Revue Foo", "Dr Jean Tremblay", "Société Bar"]
        );
        assert_eq!(copyrights.year.as_deref(), Some("1999"));
        assert_eq!(
            format_copyrights(&copyrights, &Locale::default()),
            "All rights reserved © Revue Foo, Dr Jean Tremblay et Société Bar, 1999"
        );
    }

    #[test]
    fn test_copyrights_label_falls_back_to_first() {
        let doc = Document::parse(COPYRIGHT).unwrap();
        let copyrights = Copyrighted::new(doc.root())
            .get_copyrights("es", &RenderOptions::default())
            .unwrap();
        assert_eq!(copyrights.label.as_deref(), Some("Tous droits réservés"));
        assert_eq!(copyrights.names[0], "Revue <em>Foo</em>");
    }

    #[test]
    fn test_missing_copyright() {
        let doc = Document::parse("<article/>").unwrap();
        assert_eq!(
            Copyrighted::new(doc.root()).get_copyrights("fr", &RenderOptions::plain()),
            None
        );
    }
}
