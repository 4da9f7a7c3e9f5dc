//! In-memory message catalogs
//!
//! Catalogs map locale tags (`"en"`, `"de"`) to `key → template` tables.
//! Registration takes `&self`, so a translator can be shared behind an `Arc`
//! and extended after construction; lookups only take the read lock.

use crate::error::LocaleError;
use crate::template::{Param, render};
use crate::translator::Translator;
use parking_lot::RwLock;
use std::collections::HashMap;

type Catalog = HashMap<String, String>;

/// A [`Translator`] backed by in-memory catalogs with a default-locale fallback.
#[derive(Debug, Default)]
pub struct InMemoryTranslator {
    catalogs: RwLock<HashMap<String, Catalog>>,
    default_locale: Option<String>,
}

impl InMemoryTranslator {
    /// Creates a translator with no catalogs and no default locale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a translator that falls back to `locale`.
    #[must_use]
    pub fn with_default_locale(locale: impl Into<String>) -> Self {
        Self {
            catalogs: RwLock::new(HashMap::new()),
            default_locale: Some(locale.into()),
        }
    }

    /// Starts building a translator.
    #[must_use]
    pub fn builder() -> InMemoryTranslatorBuilder {
        InMemoryTranslatorBuilder::default()
    }

    /// Adds `mapping` to the catalog of `locale`.
    ///
    /// Keys already present for that locale are overwritten.
    pub fn register_locale<I, K, V>(&self, locale: impl Into<String>, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let locale = locale.into();
        let mut catalogs = self.catalogs.write();
        let catalog = catalogs.entry(locale.clone()).or_default();
        let before = catalog.len();
        catalog.extend(mapping.into_iter().map(|(k, v)| (k.into(), v.into())));
        tracing::debug!(
            locale = %locale,
            added = catalog.len() - before,
            total = catalog.len(),
            "registered locale catalog"
        );
    }

    /// Parses a JSON object of `key → template` strings into `locale`.
    ///
    /// Returns the number of entries loaded.
    pub fn load_json(&self, locale: &str, json: &str) -> Result<usize, LocaleError> {
        let mapping: Catalog =
            serde_json::from_str(json).map_err(|source| LocaleError::InvalidCatalog {
                locale: locale.to_owned(),
                source,
            })?;
        let count = mapping.len();
        self.register_locale(locale, mapping);
        Ok(count)
    }

    /// Returns `true` if `locale` has a template for `key`.
    pub fn contains(&self, locale: &str, key: &str) -> bool {
        self.catalogs
            .read()
            .get(locale)
            .is_some_and(|catalog| catalog.contains_key(key))
    }

    /// Returns the registered locale tags, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.catalogs.read().keys().cloned().collect();
        locales.sort();
        locales
    }
}

impl Translator for InMemoryTranslator {
    fn translate(&self, locale: Option<&str>, key: &str, params: &[Param]) -> String {
        let catalogs = self.catalogs.read();
        let find = |tag: &str| catalogs.get(tag).and_then(|catalog| catalog.get(key));

        let template = locale
            .and_then(find)
            .or_else(|| self.default_locale.as_deref().and_then(find));

        match template {
            Some(template) => render(template, params),
            None => {
                tracing::trace!(key, ?locale, "no translation found, rendering raw key");
                render(key, params)
            }
        }
    }

    fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }
}

/// Builder for [`InMemoryTranslator`].
#[derive(Debug, Default)]
pub struct InMemoryTranslatorBuilder {
    default_locale: Option<String>,
    catalogs: HashMap<String, Catalog>,
}

impl InMemoryTranslatorBuilder {
    /// Sets the fallback locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Adds entries to the catalog of `locale`.
    #[must_use = "builder methods must be chained or built"]
    pub fn catalog<I, K, V>(mut self, locale: impl Into<String>, mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.catalogs
            .entry(locale.into())
            .or_default()
            .extend(mapping.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the translator.
    #[must_use]
    pub fn build(self) -> InMemoryTranslator {
        InMemoryTranslator {
            catalogs: RwLock::new(self.catalogs),
            default_locale: self.default_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::param;

    const KEY: &str = "validation:string:Cannot be longer than {max} characters";

    fn translator() -> InMemoryTranslator {
        InMemoryTranslator::builder()
            .default_locale("en")
            .catalog("en", [(KEY, "At most {max} characters")])
            .catalog("de", [(KEY, "Höchstens {max} Zeichen")])
            .build()
    }

    #[test]
    fn requested_locale_wins() {
        let text = translator().translate(Some("de"), KEY, &[param("max", "5")]);
        assert_eq!(text, "Höchstens 5 Zeichen");
    }

    #[test]
    fn falls_back_to_default_locale() {
        let text = translator().translate(Some("fr"), KEY, &[param("max", "5")]);
        assert_eq!(text, "At most 5 characters");
    }

    #[test]
    fn falls_back_to_raw_key() {
        let text = translator().translate(Some("de"), "custom {n}", &[param("n", "1")]);
        assert_eq!(text, "custom 1");
    }

    #[test]
    fn register_after_construction() {
        let t = translator();
        assert!(!t.contains("fr", KEY));
        t.register_locale("fr", [(KEY, "Au plus {max} caractères")]);
        assert!(t.contains("fr", KEY));
        assert_eq!(t.locales(), vec!["de", "en", "fr"]);
    }

    #[test]
    fn load_json_catalog() {
        let t = InMemoryTranslator::with_default_locale("en");
        let loaded = t
            .load_json("en", r#"{"greeting": "hello {name}"}"#)
            .expect("valid catalog");
        assert_eq!(loaded, 1);
        assert_eq!(t.translate(None, "greeting", &[param("name", "ann")]), "hello ann");
    }

    #[test]
    fn load_json_rejects_non_object() {
        let t = InMemoryTranslator::new();
        let err = t.load_json("en", "[1, 2]").unwrap_err();
        assert!(err.to_string().contains("'en'"));
    }
}
