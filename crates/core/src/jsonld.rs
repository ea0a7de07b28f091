//! schema.org JSON-LD documents for entity pages.
//!
//! Each builder maps an entity and its canonical URL to a serializable
//! document that the page embeds in a `<script type="application/ld+json">`
//! tag. Builders are pure; `sameAs` is omitted entirely when an entity has
//! no social links.

use serde::Serialize;

use crate::character::Character;
use crate::kiger::Kiger;
use crate::locale::LocaleSet;
use crate::maker::Maker;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

pub const SITE_NAME: &str = "kiglist";

pub const SITE_DESCRIPTION: &str = "Browse kigurumi performers, characters and makers";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebSiteJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: String,
    pub description: &'static str,
    #[serde(rename = "inLanguage")]
    pub in_language: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub url: String,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThingJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "alternateName")]
    pub alternate_name: String,
    pub image: String,
    pub description: String,
    #[serde(rename = "isPartOf", skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<CreativeWorkJsonLd>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreativeWorkJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub creator: CreatorJsonLd,
    #[serde(rename = "datePublished")]
    pub date_published: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorJsonLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "alternateName")]
    pub alternate_name: String,
    pub image: String,
    pub url: String,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Site-wide `WebSite` descriptor.
pub fn website(site_url: &str, locales: &LocaleSet) -> WebSiteJsonLd {
    WebSiteJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: SITE_NAME,
        url: site_url.to_string(),
        description: SITE_DESCRIPTION,
        in_language: locales.language_tags(),
    }
}

/// `Person` document for a kiger page.
pub fn kiger(kiger: &Kiger, url: &str) -> PersonJsonLd {
    PersonJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "Person",
        id: url.to_string(),
        name: kiger.name.clone(),
        description: kiger.bio.clone(),
        image: kiger.profile_image.clone(),
        url: url.to_string(),
        same_as: owned(kiger.social_links()),
    }
}

/// `Thing` document for a character page. `isPartOf` is present only
/// when the character has a source work.
pub fn character(character: &Character, url: &str) -> ThingJsonLd {
    let description = match &character.source {
        Some(source) => format!("{} from {}", character.name, source.title),
        None => character.name.clone(),
    };

    let is_part_of = character.source.as_ref().map(|source| CreativeWorkJsonLd {
        kind: "CreativeWork",
        name: source.title.clone(),
        creator: CreatorJsonLd {
            kind: "Organization",
            name: source.company.clone(),
        },
        date_published: source.release_year.to_string(),
    });

    ThingJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "Thing",
        id: url.to_string(),
        name: character.name.clone(),
        alternate_name: character.original_name.clone(),
        image: character.official_image.clone(),
        description,
        is_part_of,
    }
}

/// `Organization` document for a maker page.
pub fn maker(maker: &Maker, url: &str) -> OrganizationJsonLd {
    OrganizationJsonLd {
        context: SCHEMA_CONTEXT,
        kind: "Organization",
        id: url.to_string(),
        name: maker.name.clone(),
        alternate_name: maker.original_name.clone(),
        image: maker.avatar.clone(),
        url: url.to_string(),
        same_as: owned(maker.social_links()),
    }
}

fn owned(links: Vec<&str>) -> Vec<String> {
    links.into_iter().map(str::to_string).collect()
}
