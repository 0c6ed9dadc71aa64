//! Country code, country name, and translated country name lookups.
//!
//! Two static datasets are read once into immutable maps:
//!
//! - a flat table of `CODE NAME` lines, handled by [`CodeNameDirectory`], which converts codes
//!   to names and names back to codes, echoing its input on a miss;
//! - a JSON array of per-country translation records, handled by [`JsonTranslator`], which
//!   returns `None` on a miss.
//!
//! [`CountryLookup`] pairs a country table and a language table with a [`Translator`] so that
//! callers can work with display names rather than codes. Loading is fallible and all-or-nothing:
//! a missing or malformed resource yields an error, never a partially populated directory.

extern crate code_name_directory as code_names;
extern crate country_translations as translations;
extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate fern;
#[macro_use]
extern crate log;
extern crate lookup_resources as resources;

mod config;
mod errors;
mod logging;
mod lookup;

pub use self::config::*;
pub use self::errors::{ConfigError, IoContext, LookupError};
pub use self::logging::{log, log_to_file};
pub use self::lookup::CountryLookup;
pub use code_names::{CodeNameDirectory, CodeNameError};
pub use resources::{DirectoryProvider, EmbeddedProvider, ResourceError, ResourceProvider};
pub use translations::{
    JsonTranslator, KeyField, TranslationError, TranslationTable, Translator, UnknownKeyField,
    RESERVED_KEYS,
};
