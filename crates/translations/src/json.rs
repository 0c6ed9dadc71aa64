use super::{
    table::{TranslationTable, Translations},
    KeyField, TranslationError, Translator, RESERVED_KEYS,
};
use resources::ResourceProvider;
use serde_json::{Map, Value};
use std::{collections::btree_map::Entry, io::Read, path::Path};

/// A `Translator` populated from a JSON array of translation records.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonTranslator {
    table: TranslationTable,
    key:   KeyField,
}

impl JsonTranslator {
    /// Loads the records stored in the resource `name`, keying each by the `key` field.
    pub fn new<P: ResourceProvider + ?Sized>(
        provider: &P,
        name: &str,
        key: KeyField,
    ) -> Result<Self, TranslationError> {
        let translator = Self::from_slice(&provider.load(name)?, key)?;
        info!("loaded translations for {} countries from '{}'", translator.table.len(), name);
        Ok(translator)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, key: KeyField) -> Result<Self, TranslationError> {
        let data = resources::read(path).map_err(|why| TranslationError::Read { why })?;
        Self::from_slice(&data, key)
    }

    pub fn from_reader<R: Read>(reader: R, key: KeyField) -> Result<Self, TranslationError> {
        let data =
            resources::read_to_vec(reader).map_err(|why| TranslationError::Read { why })?;
        Self::from_slice(&data, key)
    }

    /// Parses the whole array before returning; any malformed record fails the entire load.
    pub fn from_slice(data: &[u8], key: KeyField) -> Result<Self, TranslationError> {
        let records: Vec<Map<String, Value>> =
            serde_json::from_slice(data).map_err(|why| TranslationError::Json { why })?;

        let mut table = TranslationTable::new();
        for (index, record) in records.into_iter().enumerate() {
            let (country, translations) = parse_record(index, record, key)?;
            match table.countries.entry(country) {
                Entry::Occupied(mut entry) => {
                    warn!("record {} replaces an earlier record for '{}'", index, entry.key());
                    entry.insert(translations);
                }
                Entry::Vacant(entry) => {
                    entry.insert(translations);
                }
            }
        }

        Ok(Self { table, key })
    }

    /// The field that records were keyed by.
    pub fn key_field(&self) -> KeyField { self.key }

    pub fn table(&self) -> &TranslationTable { &self.table }
}

impl Translator for JsonTranslator {
    fn languages_for_country(&self, country: &str) -> Vec<&str> {
        self.table.languages_for_country(country)
    }

    fn countries(&self) -> Vec<&str> { self.table.countries() }

    fn translate(&self, country: &str, language: &str) -> Option<&str> {
        self.table.translate(country, language)
    }
}

fn parse_record(
    index: usize,
    mut record: Map<String, Value>,
    key: KeyField,
) -> Result<(String, Translations), TranslationError> {
    let country = match record.remove(key.as_str()) {
        Some(Value::String(country)) => country,
        Some(_) => return Err(TranslationError::KeyNotString { index, key: key.as_str().into() }),
        None => return Err(TranslationError::MissingKey { index, key: key.as_str().into() }),
    };

    let mut translations = Translations::new();
    for (language, value) in record {
        if RESERVED_KEYS.contains(&language.as_str()) {
            continue;
        }

        match value {
            Value::String(name) => {
                translations.insert(language, name);
            }
            _ => return Err(TranslationError::NotString { index, key: language }),
        }
    }

    Ok((country, translations))
}
