//! Reads a flat table of `CODE NAME` lines into a pair of maps, providing lookups from a code to
//! its name and from a name back to its code.
//!
//! The table is used for both country codes (`country-codes.txt`) and language codes
//! (`language-codes.txt`). Lines that do not split into exactly two whitespace-separated fields
//! are skipped, and a later line for the same code replaces the earlier one.

extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;
extern crate lookup_resources as resources;

use resources::{ResourceError, ResourceProvider};
use std::{
    collections::BTreeMap,
    io::{self, Read},
    iter::FromIterator,
    path::Path,
    str::{self, Utf8Error},
};

/// Failures that abort the construction of a `CodeNameDirectory`.
#[derive(Debug, Fail)]
pub enum CodeNameError {
    #[fail(display = "{}", why)]
    Resource { why: ResourceError },
    #[fail(display = "unable to read code table: {}", why)]
    Read { why: io::Error },
    #[fail(display = "code table is not valid UTF-8: {}", why)]
    Encoding { why: Utf8Error },
}

impl From<ResourceError> for CodeNameError {
    fn from(why: ResourceError) -> Self { CodeNameError::Resource { why } }
}

/// An immutable mapping between codes and names, in both directions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CodeNameDirectory {
    by_code: BTreeMap<String, String>,
    by_name: BTreeMap<String, String>,
}

impl CodeNameDirectory {
    /// Loads the table stored in the resource `name`.
    ///
    /// # Example
    /// ```rust
    /// use code_name_directory::CodeNameDirectory;
    /// use lookup_resources::EmbeddedProvider;
    ///
    /// let provider = EmbeddedProvider::new().with("country-codes.txt", "CAN Canada\n");
    /// let countries = CodeNameDirectory::new(&provider, "country-codes.txt").unwrap();
    /// assert_eq!(countries.name_for_code("CAN"), "Canada");
    /// assert_eq!(countries.name_for_code("ZZZ"), "ZZZ");
    /// ```
    pub fn new<P: ResourceProvider + ?Sized>(
        provider: &P,
        name: &str,
    ) -> Result<Self, CodeNameError> {
        let directory = Self::from_slice(&provider.load(name)?)?;
        info!("loaded {} codes from '{}'", directory.country_count(), name);
        Ok(directory)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CodeNameError> {
        let data = resources::read(path).map_err(|why| CodeNameError::Read { why })?;
        Self::from_slice(&data)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CodeNameError> {
        let data = resources::read_to_vec(reader).map_err(|why| CodeNameError::Read { why })?;
        Self::from_slice(&data)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, CodeNameError> {
        str::from_utf8(data)
            .map(|text| text.lines().collect())
            .map_err(|why| CodeNameError::Encoding { why })
    }

    /// The name mapped to `code`, or `code` itself when it is unknown.
    pub fn name_for_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.by_code.get(code).map_or(code, String::as_str)
    }

    /// The code mapped to `name`, or `name` itself when it is unknown.
    pub fn code_for_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.by_name.get(name).map_or(name, String::as_str)
    }

    /// Number of distinct codes in the table.
    pub fn country_count(&self) -> usize { self.by_code.len() }

    pub fn is_empty(&self) -> bool { self.by_code.is_empty() }

    pub fn contains_code(&self, code: &str) -> bool { self.by_code.contains_key(code) }

    pub fn contains_name(&self, name: &str) -> bool { self.by_name.contains_key(name) }

    /// Every `(code, name)` pair, ordered by code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_code.iter().map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for CodeNameDirectory {
    fn from_iter<I: IntoIterator<Item = S>>(lines: I) -> Self {
        let mut directory = Self::default();

        for line in lines {
            if let Some((code, name)) = parse_line(line.as_ref()) {
                directory.by_code.insert(code.into(), name.into());
                directory.by_name.insert(name.into(), code.into());
            }
        }

        directory
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(code), Some(name), None) => Some((code, name)),
        _ => None,
    }
}
