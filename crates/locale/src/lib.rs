//! # rulebook-locale
//!
//! Message catalogs for rulebook validation errors.
//!
//! Rule families describe each failure with a *locale key* plus named
//! parameters. A [`Translator`] turns that pair into display text for the
//! locale active at validation time.
//!
//! ```rust,ignore
//! use rulebook_locale::{InMemoryTranslator, Translator, param};
//!
//! let translator = InMemoryTranslator::builder()
//!     .default_locale("en")
//!     .catalog("de", [("validation:string:Should be fulfilled", "Pflichtfeld")])
//!     .build();
//!
//! let text = translator.translate(Some("de"), "validation:string:Should be fulfilled", &[]);
//! assert_eq!(text, "Pflichtfeld");
//! ```
//!
//! Lookup order: the requested locale, then the translator's default locale,
//! then the raw key itself. Every step renders `{name}` placeholders from the
//! supplied parameters, so an untranslated key still reads sensibly.

pub mod error;
pub mod memory;
pub mod template;
pub mod translator;

pub use error::LocaleError;
pub use memory::{InMemoryTranslator, InMemoryTranslatorBuilder};
pub use template::{Param, param, render};
pub use translator::{NoopTranslator, Translator};
