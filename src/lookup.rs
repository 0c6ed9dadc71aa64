use crate::{config::Config, errors::LookupError};
use code_names::CodeNameDirectory;
use resources::ResourceProvider;
use translations::{JsonTranslator, Translator};

/// Country and language tables paired with a translator, for lookups by display name.
///
/// Names are converted to codes through the code tables before they reach the translator, and
/// codes coming out of the translator are converted back to names. The code tables echo unknown
/// input, so a code missing from a table is shown as the code itself.
#[derive(Debug)]
pub struct CountryLookup<T = JsonTranslator> {
    countries:  CodeNameDirectory,
    languages:  CodeNameDirectory,
    translator: T,
}

impl CountryLookup<JsonTranslator> {
    /// Loads every resource named by `config` from its resource directory.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        Self::with_provider(config, &config.provider())
    }

    /// Loads every resource named by `config` through `provider`.
    pub fn with_provider<P: ResourceProvider + ?Sized>(
        config: &Config,
        provider: &P,
    ) -> Result<Self, LookupError> {
        let countries = CodeNameDirectory::new(provider, &config.country_codes).map_err(|why| {
            LookupError::CountryCodes { resource: config.country_codes.clone(), why }
        })?;

        let languages = CodeNameDirectory::new(provider, &config.language_codes).map_err(|why| {
            LookupError::LanguageCodes { resource: config.language_codes.clone(), why }
        })?;

        let translator = JsonTranslator::new(provider, &config.translations, config.key_field)
            .map_err(|why| LookupError::Translations {
                resource: config.translations.clone(),
                why,
            })?;

        Ok(Self::from_parts(countries, languages, translator))
    }
}

impl<T: Translator> CountryLookup<T> {
    pub fn from_parts(
        countries: CodeNameDirectory,
        languages: CodeNameDirectory,
        translator: T,
    ) -> Self {
        Self { countries, languages, translator }
    }

    pub fn countries(&self) -> &CodeNameDirectory { &self.countries }

    pub fn languages(&self) -> &CodeNameDirectory { &self.languages }

    pub fn translator(&self) -> &T { &self.translator }

    /// Names of every country the translator knows of.
    pub fn country_names(&self) -> Vec<&str> {
        self.translator
            .countries()
            .into_iter()
            .map(|code| self.countries.name_for_code(code))
            .collect()
    }

    /// Names of the languages that `country` has been translated into.
    pub fn language_names(&self, country: &str) -> Vec<&str> {
        let code = self.countries.code_for_name(country);
        self.translator
            .languages_for_country(code)
            .into_iter()
            .map(|tag| self.languages.name_for_code(tag))
            .collect()
    }

    /// The name of `country` in `language`, where both are given by name.
    pub fn translate(&self, country: &str, language: &str) -> Option<&str> {
        let country = self.countries.code_for_name(country);
        let language = self.languages.code_for_name(language);
        self.translator.translate(country, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_names::CodeNameError;
    use resources::{EmbeddedProvider, ResourceError};
    use std::path::Path;
    use translations::{KeyField, TranslationError, TranslationTable};

    fn bundled() -> Config {
        Config {
            resource_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"),
            ..Config::default()
        }
    }

    fn embedded() -> EmbeddedProvider {
        EmbeddedProvider::new()
            .with("country-codes.txt", "can Canada\nfra France\nusa United States\n")
            .with("language-codes.txt", "de German\nen English\n")
            .with(
                "sample.json",
                r#"[{"id": 124, "alpha2": "ca", "alpha3": "can", "de": "Kanada", "en": "Canada", "eo": "Kanado"},
                    {"id": 840, "alpha2": "us", "alpha3": "usa", "de": "Vereinigte Staaten", "en": "United States"}]"#,
            )
    }

    #[test]
    fn bundled_resources() {
        let lookup = CountryLookup::new(&bundled()).unwrap();
        assert_eq!(lookup.countries().country_count(), 10);
        assert_eq!(lookup.languages().country_count(), 8);
        assert_eq!(lookup.translator().countries().len(), 10);

        assert_eq!(lookup.translate("Germany", "Japanese"), Some("ドイツ"));
        assert_eq!(lookup.translate("Peru", "French"), Some("Pérou"));
        assert_eq!(lookup.translate("Atlantis", "French"), None);
        assert_eq!(lookup.translate("Peru", "Klingon"), None);
        assert_eq!(lookup.language_names("Atlantis"), Vec::<&str>::new());

        let names = lookup.country_names();
        assert!(names.contains(&"Kenya"));
        assert!(names.contains(&"Norway"));
    }

    #[test]
    fn names_round_trip_through_codes() {
        let lookup = CountryLookup::with_provider(&Config::default(), &embedded()).unwrap();

        // "usa United States" has three fields, so the code is shown as-is.
        assert_eq!(lookup.country_names(), vec!["Canada", "usa"]);
        assert_eq!(lookup.language_names("Canada"), vec!["German", "English", "eo"]);
        assert_eq!(lookup.translate("Canada", "German"), Some("Kanada"));
        assert_eq!(lookup.translate("Canada", "eo"), Some("Kanado"));
        assert_eq!(lookup.translate("usa", "German"), Some("Vereinigte Staaten"));
        assert_eq!(lookup.translate("France", "German"), None);
    }

    #[test]
    fn configured_key_field() {
        let config = Config { key_field: KeyField::Alpha2, ..Config::default() };
        let lookup = CountryLookup::with_provider(&config, &embedded()).unwrap();
        assert_eq!(lookup.translator().countries(), vec!["ca", "us"]);
        assert_eq!(lookup.translate("ca", "English"), Some("Canada"));
    }

    #[test]
    fn missing_resources() {
        let config = Config { country_codes: "missing.txt".into(), ..Config::default() };
        match CountryLookup::with_provider(&config, &embedded()) {
            Err(LookupError::CountryCodes {
                resource,
                why: CodeNameError::Resource { why: ResourceError::NotFound { .. } },
            }) => assert_eq!(resource, "missing.txt"),
            other => panic!("expected missing country codes, got {:?}", other),
        }

        let config = Config { translations: "missing.json".into(), ..Config::default() };
        match CountryLookup::with_provider(&config, &embedded()) {
            Err(LookupError::Translations {
                why: TranslationError::Resource { why: ResourceError::NotFound { name } },
                ..
            }) => assert_eq!(name, "missing.json"),
            other => panic!("expected missing translations, got {:?}", other),
        }

        let config =
            Config { resource_dir: "/nonexistent/country-lookup".into(), ..Config::default() };
        assert!(CountryLookup::new(&config).is_err());
    }

    #[test]
    fn malformed_translations() {
        let provider = embedded().with("sample.json", r#"[{"alpha2": "ca", "en": "Canada"}]"#);
        match CountryLookup::with_provider(&Config::default(), &provider) {
            Err(LookupError::Translations {
                why: TranslationError::MissingKey { index: 0, .. },
                ..
            }) => (),
            other => panic!("expected a missing key, got {:?}", other),
        }
    }

    #[test]
    fn hand_built_translator() {
        let countries: CodeNameDirectory = ["can Canada"].iter().collect();
        let languages: CodeNameDirectory = ["en English", "fr French"].iter().collect();
        let translator: TranslationTable =
            vec![("can", "en", "Canada"), ("can", "fr", "Canada")].into_iter().collect();

        let lookup = CountryLookup::from_parts(countries, languages, translator);
        assert_eq!(lookup.language_names("Canada"), vec!["English", "French"]);
        assert_eq!(lookup.translate("Canada", "French"), Some("Canada"));
        assert_eq!(lookup.translate("Canada", "German"), None);
    }

    #[test]
    fn identical_loads() {
        let first = CountryLookup::new(&bundled()).unwrap();
        let second = CountryLookup::new(&bundled()).unwrap();
        assert_eq!(first.countries(), second.countries());
        assert_eq!(first.translator(), second.translator());
        for country in first.country_names() {
            for language in first.language_names(country) {
                assert_eq!(
                    first.translate(country, language),
                    second.translate(country, language)
                );
            }
        }
    }
}
