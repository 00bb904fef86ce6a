use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::domain::models::SeoMetadata;

pub struct PageExtractor;

impl PageExtractor {
    /// Read every SEO field the scorer looks at. Blank values become `None`.
    pub fn extract_seo(html: &Html) -> SeoMetadata {
        SeoMetadata {
            title: Self::extract_title(html),
            description: Self::extract_meta_name(html, MetaName::Description),
            keywords: Self::extract_meta_name(html, MetaName::Keywords),
            og_title: Self::extract_og(html, OgProperty::Title),
            og_description: Self::extract_og(html, OgProperty::Description),
            og_image: Self::extract_og(html, OgProperty::Image),
            canonical_url: Self::extract_canonical(html),
        }
    }

    pub fn extract_title(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
        html.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn extract_canonical(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("link[rel='canonical']").unwrap());
        first_attr(html, selector, "href")
    }

    fn extract_meta_name(html: &Html, name: MetaName) -> Option<String> {
        static DESCRIPTION: OnceLock<Selector> = OnceLock::new();
        static KEYWORDS: OnceLock<Selector> = OnceLock::new();
        let selector = match name {
            MetaName::Description => DESCRIPTION
                .get_or_init(|| Selector::parse("meta[name='description' i]").unwrap()),
            MetaName::Keywords => {
                KEYWORDS.get_or_init(|| Selector::parse("meta[name='keywords' i]").unwrap())
            }
        };
        first_attr(html, selector, "content")
    }

    /// `property` is the Open Graph attribute; `name="og:*"` is accepted when it is absent.
    fn extract_og(html: &Html, property: OgProperty) -> Option<String> {
        static TITLE: OnceLock<[Selector; 2]> = OnceLock::new();
        static DESCRIPTION: OnceLock<[Selector; 2]> = OnceLock::new();
        static IMAGE: OnceLock<[Selector; 2]> = OnceLock::new();
        let (cell, tag) = match property {
            OgProperty::Title => (&TITLE, "og:title"),
            OgProperty::Description => (&DESCRIPTION, "og:description"),
            OgProperty::Image => (&IMAGE, "og:image"),
        };
        let [by_property, by_name] = cell.get_or_init(|| {
            [
                Selector::parse(&format!("meta[property='{}' i]", tag)).unwrap(),
                Selector::parse(&format!("meta[name='{}' i]", tag)).unwrap(),
            ]
        });
        first_attr(html, by_property, "content").or_else(|| first_attr(html, by_name, "content"))
    }
}

#[derive(Clone, Copy)]
enum MetaName {
    Description,
    Keywords,
}

#[derive(Clone, Copy)]
enum OgProperty {
    Title,
    Description,
    Image,
}

fn first_attr(html: &Html, selector: &Selector, attr: &str) -> Option<String> {
    html.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
