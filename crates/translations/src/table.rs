use super::Translator;
use std::{collections::BTreeMap, iter::FromIterator};

/// Language tag to translated country name.
pub(crate) type Translations = BTreeMap<String, String>;

/// An in-memory map of country codes to the translations of each country's name.
///
/// Tables can be built by hand from `(country, language, name)` triples:
///
/// ```rust
/// use country_translations::{TranslationTable, Translator};
///
/// let table: TranslationTable = vec![("can", "de", "Kanada"), ("can", "en", "Canada")]
///     .into_iter()
///     .collect();
/// assert_eq!(table.translate("can", "de"), Some("Kanada"));
/// assert_eq!(table.languages_for_country("can"), vec!["de", "en"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationTable {
    pub(crate) countries: BTreeMap<String, Translations>,
}

impl TranslationTable {
    pub fn new() -> Self { Self::default() }

    /// Number of countries in the table.
    pub fn len(&self) -> usize { self.countries.len() }

    pub fn is_empty(&self) -> bool { self.countries.is_empty() }
}

impl Translator for TranslationTable {
    fn languages_for_country(&self, country: &str) -> Vec<&str> {
        match self.countries.get(country) {
            Some(translations) => translations.keys().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    fn countries(&self) -> Vec<&str> { self.countries.keys().map(String::as_str).collect() }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.countries
            .get(country)
            .and_then(|translations| translations.get(language))
            .map(String::as_str)
    }
}

impl<C, L, N> FromIterator<(C, L, N)> for TranslationTable
where
    C: Into<String>,
    L: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, L, N)>>(entries: I) -> Self {
        let mut table = Self::default();

        for (country, language, name) in entries {
            table
                .countries
                .entry(country.into())
                .or_insert_with(Translations::new)
                .insert(language.into(), name.into());
        }

        table
    }
}
