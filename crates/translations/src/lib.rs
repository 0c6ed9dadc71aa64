//! Country names translated into many languages.
//!
//! The data is a JSON array with one object per country, such as
//! `{"id": 4, "alpha2": "af", "alpha3": "afg", "de": "Afghanistan", "fr": "Afghanistan"}`. One of
//! the code fields keys the record, and every field other than the reserved metadata fields maps a
//! language tag to the name of the country in that language.

extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;
extern crate lookup_resources as resources;
extern crate serde_json;

mod error;
mod json;
mod key;
mod table;

pub use self::error::TranslationError;
pub use self::json::JsonTranslator;
pub use self::key::{KeyField, UnknownKeyField, RESERVED_KEYS};
pub use self::table::TranslationTable;

/// Translates country codes into country names for a given language.
///
/// A miss is never an error: unknown countries have no languages, and `translate` returns `None`
/// rather than echoing its input.
pub trait Translator {
    /// Language tags known for `country`, or an empty list if the country is unknown.
    fn languages_for_country(&self, country: &str) -> Vec<&str>;

    /// Every known country code.
    fn countries(&self) -> Vec<&str>;

    /// The name of `country` in `language`, if both are known.
    fn translate(&self, country: &str, language: &str) -> Option<&str>;
}
