//! # rulebook
//!
//! Fluent, conditionally-gated validation rules for the fields of structured
//! records, with localized error messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rulebook::prelude::*;
//!
//! struct SignUp { email: String, nickname: Option<String>, age: u8 }
//! rulebook::record! { SignUp { email, nickname, age } }
//!
//! let mut validator = Validator::new();
//! validator.configure::<SignUp>(|rules| {
//!     rules.string("email")?.trim().required().regexp(Regex::new(r"^[^@]+@[^@]+$").unwrap());
//!     rules.string_opt("nickname")?.min_len(3).when(|_, nick| nick.is_some());
//!     rules.int::<u8>("age")?.min(18);
//!     Ok(())
//! })?;
//!
//! let errors = validator.validate(&ValidationContext::new(), &mut signup);
//! ```
//!
//! ## Concepts
//!
//! - **Records** list their fields once, with [`record!`] or a hand-written
//!   [`Record`](registry::Record) impl. Rules address fields by dotted path.
//! - **Bundles** group entry points per value family; see [`rules`].
//! - **Gates** (`when`) make every rule of one builder conditional.
//! - **Representations**: each family accepts a plain and an `Option` field;
//!   rules see one canonical shape through [`Slot`](foundation::Slot).
//! - **Localization**: errors carry a locale key and a message rendered by a
//!   [`Translator`](rulebook_locale::Translator) in the context's locale.

// Boxed rule closures and accessor chains have inherently nested types.
#![allow(clippy::type_complexity)]

pub mod error;
pub mod foundation;
pub mod helper;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;
mod validator;

pub use error::{ConfigError, RegistryError};
pub use foundation::{ValidationContext, ValidationError, ValidationErrors};
pub use validator::{ErrorsTransformer, Rules, Validator, ValidatorBuilder};

/// Message catalogs and translators.
pub use rulebook_locale as locale;
