//! Supported site locales and localized path derivation.
//!
//! The base locale is served without a prefix (`/kiger`); every other
//! locale is served under `/<locale>` (`/zh-tw/kiger`).

use crate::error::CoreError;

pub const DEFAULT_LOCALES: &[&str] = &["en", "zh-tw", "zh-cn"];

pub const DEFAULT_BASE_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<String>,
    base: String,
}

impl LocaleSet {
    /// Build a locale set. The base locale must be one of `locales`.
    pub fn new<I, S>(locales: I, base: &str) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for locale in locales {
            let locale = locale.into().trim().to_lowercase();
            if !locale.is_empty() && !unique.contains(&locale) {
                unique.push(locale);
            }
        }

        let base = base.trim().to_lowercase();
        if !unique.contains(&base) {
            return Err(CoreError::Validation(format!(
                "Base locale '{base}' must be one of: {}",
                unique.join(", ")
            )));
        }

        Ok(Self {
            locales: unique,
            base,
        })
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Path of `path` in `locale`. `"/"` in `zh-tw` becomes `"/zh-tw/"`.
    pub fn localize(&self, path: &str, locale: &str) -> String {
        if locale == self.base {
            path.to_string()
        } else {
            format!("/{locale}{path}")
        }
    }

    /// BCP 47 tags with the region upper-cased, e.g. `zh-TW`.
    pub fn language_tags(&self) -> Vec<String> {
        self.locales.iter().map(|l| language_tag(l)).collect()
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            locales: DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
            base: DEFAULT_BASE_LOCALE.to_string(),
        }
    }
}

fn language_tag(locale: &str) -> String {
    match locale.split_once('-') {
        Some((lang, region)) => format!("{lang}-{}", region.to_uppercase()),
        None => locale.to_string(),
    }
}
