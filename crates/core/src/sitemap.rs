//! Multilingual XML sitemap rendering.
//!
//! Every page path is emitted once per locale. Each `<url>` lists the page
//! in all locales as `xhtml:link` alternates plus an `x-default` alternate
//! pointing at the unprefixed path.

use chrono::NaiveDate;

use crate::locale::LocaleSet;
use crate::types::ResourceKind;

pub const CONTENT_TYPE: &str = "application/xml";

pub const CACHE_CONTROL: &str = "max-age=3600";

/// Home page plus the listing page of every resource kind.
pub fn static_pages() -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(ResourceKind::ALL.into_iter().map(ResourceKind::listing_path))
        .collect()
}

/// Render the sitemap document.
///
/// `site_url` must not end with a slash; page paths start with one.
pub fn render(site_url: &str, locales: &LocaleSet, pages: &[String], lastmod: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n        \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    for page in pages {
        for locale in locales.locales() {
            write_url_entry(&mut xml, site_url, locales, page, locale, &lastmod);
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

fn write_url_entry(
    xml: &mut String,
    site_url: &str,
    locales: &LocaleSet,
    page: &str,
    locale: &str,
    lastmod: &str,
) {
    let loc = format!("{site_url}{}", locales.localize(page, locale));

    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape(&loc)));
    xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    for alternate in locales.locales() {
        let href = format!("{site_url}{}", locales.localize(page, alternate));
        xml.push_str(&alternate_link(alternate, &href));
    }
    xml.push_str(&alternate_link("x-default", &format!("{site_url}{page}")));
    xml.push_str("  </url>\n");
}

fn alternate_link(hreflang: &str, href: &str) -> String {
    format!(
        "    <xhtml:link rel=\"alternate\" hreflang=\"{hreflang}\" href=\"{}\" />\n",
        escape(href)
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://kiglist.com";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn static_pages_cover_home_and_listings() {
        assert_eq!(static_pages(), vec!["/", "/kiger", "/character", "/maker"]);
    }

    #[test]
    fn one_entry_per_page_and_locale() {
        let pages = vec!["/".to_string(), "/kiger/p1".to_string()];
        let xml = render(SITE, &LocaleSet::default(), &pages, date());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 6);
        assert_eq!(xml.matches("<lastmod>2024-05-01</lastmod>").count(), 6);
    }

    #[test]
    fn loc_is_prefixed_for_non_base_locales() {
        let pages = vec!["/kiger".to_string()];
        let xml = render(SITE, &LocaleSet::default(), &pages, date());

        assert!(xml.contains("<loc>https://kiglist.com/kiger</loc>"));
        assert!(xml.contains("<loc>https://kiglist.com/zh-tw/kiger</loc>"));
        assert!(xml.contains("<loc>https://kiglist.com/zh-cn/kiger</loc>"));
    }

    #[test]
    fn every_entry_lists_all_alternates_and_x_default() {
        let pages = vec!["/maker/3".to_string()];
        let xml = render(SITE, &LocaleSet::default(), &pages, date());

        for entry in xml.split("<url>").skip(1) {
            assert_eq!(entry.matches("hreflang=").count(), 4);
            assert!(entry.contains(
                "hreflang=\"zh-cn\" href=\"https://kiglist.com/zh-cn/maker/3\""
            ));
            assert!(entry.contains(
                "hreflang=\"x-default\" href=\"https://kiglist.com/maker/3\""
            ));
        }
    }

    #[test]
    fn escapes_special_characters() {
        let pages = vec!["/kiger/a&b".to_string()];
        let locales = LocaleSet::new(["en"], "en").unwrap();
        let xml = render(SITE, &locales, &pages, date());

        assert!(xml.contains("<loc>https://kiglist.com/kiger/a&amp;b</loc>"));
        assert!(!xml.contains("a&b"));
    }

    #[test]
    fn detail_ids_stay_inside_their_segment() {
        let pages = vec![ResourceKind::Kiger.detail_path("a?x=1")];
        let locales = LocaleSet::new(["en"], "en").unwrap();
        let xml = render(SITE, &locales, &pages, date());

        assert!(xml.contains("<loc>https://kiglist.com/kiger/a%3Fx%3D1</loc>"));
    }
}
