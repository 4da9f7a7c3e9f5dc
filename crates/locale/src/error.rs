//! Catalog loading errors

/// Errors raised while loading message catalogs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LocaleError {
    /// The catalog source was not a JSON object of string templates.
    #[error("invalid catalog for locale '{locale}': {source}")]
    InvalidCatalog {
        /// Locale the catalog was meant for.
        locale: String,
        #[source]
        source: serde_json::Error,
    },
}
