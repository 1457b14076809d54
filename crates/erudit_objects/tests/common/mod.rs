/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use erudit_core::{Locale, RenderMode, RenderOptions};
use erudit_objects::{Article, Journal, Publication};

// --- Fixtures ---

pub const ARTICLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<article xmlns="http://www.erudit.org/xsd/article" xmlns:xlink="http://www.w3.org/1999/xlink" lang="fr" languesuppl="en" ordseq="4">
  <admin>
    <infoarticle>
      <idpublic scheme="doi">10.7202/1005860ar</idpublic>
      <pagination><ppage>133</ppage><dpage>162</dpage></pagination>
    </infoarticle>
    <revue id="rssi" lang="fr en">
      <titrerev>Recherches sémiotiques</titrerev>
      <titrerevparal lang="en">Semiotic Inquiry</titrerevparal>
      <idissn>0229-8651</idissn>
      <idissnnum>1923-9920</idissnnum>
    </revue>
    <numero id="rssi1505">
      <volume>28</volume>
      <nonumero>2</nonumero>
      <nonumero>3</nonumero>
      <pub><annee>2008</annee><annee>2009</annee></pub>
    </numero>
    <droitsauteur>Tous droits réservés © <nomorg>Association canadienne de sémiotique</nomorg>, 2008</droitsauteur>
  </admin>
  <liminaire>
    <grtitre>
      <surtitre>Dossier</surtitre>
      <titre>Esthétique et sémiotique</titre>
      <sstitre>Présentation</sstitre>
      <titreparal lang="en">Aesthetics and Semiotics</titreparal>
      <sstitreparal lang="en">Presentation</sstitreparal>
    </grtitre>
    <grauteur>
      <auteur id="au1">
        <nompers><prenom>Jean</prenom><autreprenom>L.</autreprenom><nomfamille>Fisette</nomfamille></nompers>
        <affiliation><alinea>Université du Québec à Montréal</alinea></affiliation>
      </auteur>
      <auteur id="au2">
        <nompers><prenom>Marie</prenom><nomfamille>Tremblay</nomfamille></nompers>
      </auteur>
    </grauteur>
    <resume lang="fr" typeresume="resume"><titre>Résumé</titre><alinea>Un <marquage typemarq="italique">résumé</marquage><renvoi idref="no1" typeref="note">1</renvoi>.</alinea></resume>
    <resume lang="en" typeresume="abstract"><titre>Abstract</titre><alinea>An abstract.</alinea></resume>
    <grmotcle lang="fr"><titre>Mots-clés :</titre><motcle>esthétique</motcle><motcle>sémiotique</motcle></grmotcle>
    <grmotcle lang="en"><motcle>aesthetics</motcle></grmotcle>
    <notegen typenoteg="edito"><alinea>Première version publiée dans <marquage typemarq="italique">Le Devoir</marquage>.</alinea></notegen>
  </liminaire>
  <partiesann>
    <grbiblio>
      <biblio>
        <refbiblio>Akenside, Mark. <marquage typemarq="italique">Poems</marquage>. London: J. Dodsley, 1772.</refbiblio>
        <refbiblio>Cheung, Martha. Target. 17(1):27-48. <idpublic scheme="doi">10.1075/target.17.1.03che</idpublic></refbiblio>
      </biblio>
    </grbiblio>
  </partiesann>
</article>"#;

pub const REVIEW_XML: &str = r#"<article lang="fr">
  <liminaire>
    <grtitre>
      <titre/>
      <trefbiblio><marquage typemarq="italique">Sociologie des relations professionnelles</marquage>, Paris, 2008.</trefbiblio>
      <trefbiblio><marquage typemarq="italique">Sociologie du travail</marquage>, Paris, 2008.</trefbiblio>
    </grtitre>
  </liminaire>
</article>"#;

pub const PUBLICATION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<numero xmlns="http://www.erudit.org/xsd/article" id="smq1826" typenumero="supp">
  <revue id="smq" lang="fr">
    <titrerev>Santé mentale au Québec</titrerev>
    <titrerevparal lang="en">Mental Health in Quebec</titrerevparal>
    <idissn>0383-6320</idissn>
    <idissnnum>1708-3923</idissnnum>
    <directeur><nompers><prenom>Patrick</prenom><nomfamille>González</nomfamille></nompers></directeur>
    <redacteur><nompers><prenom>Isabelle</prenom><nomfamille>Richer</nomfamille></nompers><fonction lang="fr">Rédactrice adjointe</fonction></redacteur>
    <redacteurchef typerc="regulier"><nompers><prenom>Marie-Claude</prenom><nomfamille>Loiselle</nomfamille></nompers></redacteurchef>
    <redacteurchef typerc="invite" idrefs="th1"><nompers><prenom>Alain</prenom><nomfamille>Lesage</nomfamille></nompers></redacteurchef>
    <redacteurchef typerc="invite" idrefs="th2"><nompers><prenom>Luc</prenom><nomfamille>Blanchet</nomfamille></nompers></redacteurchef>
  </revue>
  <volume>52</volume>
  <nonumero>214</nonumero>
  <pub><periode>Printemps</periode><annee>2009</annee></pub>
  <nbarticle>12</nbarticle>
  <grtheme id="th1">
    <theme>La production au Québec</theme>
    <sstheme>Cinq cinéastes sur le divan</sstheme>
  </grtheme>
  <grtheme id="th2" lang="fr">
    <theme>Géopolitique</theme>
    <themeparal lang="en">Geopolitics</themeparal>
  </grtheme>
  <notegen typenoteg="edito"><alinea>POUR NABIHA : une note.</alinea><alinea>Justin K. Bisanswa</alinea></notegen>
  <droitsauteur>Tous droits réservés © <nomorg>Santé mentale au Québec</nomorg>, 2009</droitsauteur>
</numero>"#;

pub const JOURNAL_XML: &str = r#"<revue id="mi" lang="fr en es">
  <titrerev>Management international</titrerev>
  <titrerevparal lang="en">International Management</titrerevparal>
  <titrerevparal lang="es">Gestión Internacional</titrerevparal>
  <note langue="fr">Revue <marquage typemarq="italique">bilingue</marquage>.</note>
  <note langue="fr">Deuxième note.</note>
  <note langue="en">An English note.</note>
  <note langue="en"> </note>
  <note>Note without a language.</note>
  <annee valeur="2015"><numero pid="erudit:mi1871"/></annee>
  <annee valeur="2009"><numero pid="erudit:mi115"/></annee>
  <annee valeur="2012"><numero pid="erudit:mi1234"/></annee>
</revue>"#;

// --- Helpers ---

pub fn article() -> Article {
    Article::from_xml(ARTICLE_XML).expect("article fixture parses")
}

pub fn review() -> Article {
    Article::from_xml(REVIEW_XML).expect("review fixture parses")
}

pub fn publication() -> Publication {
    Publication::from_xml(PUBLICATION_XML).expect("publication fixture parses")
}

pub fn journal() -> Journal {
    Journal::from_xml(JOURNAL_XML).expect("journal fixture parses")
}

pub fn english() -> Locale {
    Locale::load("en").expect("embedded English catalog")
}

pub fn plain() -> RenderOptions<'static> {
    RenderOptions::plain()
}

pub fn html() -> RenderOptions<'static> {
    RenderOptions::html_default()
}

pub fn english_plain(locale: &Locale) -> RenderOptions<'_> {
    RenderOptions::new(locale, RenderMode::Plain)
}
