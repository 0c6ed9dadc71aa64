use crate::errors::ConfigError;
use resources::DirectoryProvider;
use std::{
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use translations::KeyField;

pub const DEFAULT_RESOURCE_DIR: &str = "resources";
pub const DEFAULT_COUNTRY_CODES: &str = "country-codes.txt";
pub const DEFAULT_LANGUAGE_CODES: &str = "language-codes.txt";
pub const DEFAULT_TRANSLATIONS: &str = "sample.json";

/// Where a `CountryLookup` finds its data, and how translation records are keyed.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub resource_dir:   PathBuf,
    pub country_codes:  String,
    pub language_codes: String,
    pub translations:   String,
    pub key_field:      KeyField,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resource_dir:   DEFAULT_RESOURCE_DIR.into(),
            country_codes:  DEFAULT_COUNTRY_CODES.into(),
            language_codes: DEFAULT_LANGUAGE_CODES.into(),
            translations:   DEFAULT_TRANSLATIONS.into(),
            key_field:      KeyField::default(),
        }
    }
}

impl Config {
    /// Reads `KEY=value` lines from a file, starting from the defaults.
    ///
    /// ```text
    /// RESOURCE_DIR=/usr/share/country-lookup
    /// TRANSLATIONS="countries.json"
    /// KEY_FIELD=alpha2
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let read_error = |why| ConfigError::Read { path: path.to_path_buf(), why };

        let file = resources::open(path).map_err(read_error)?;
        let lines = BufReader::new(file).lines().collect::<io::Result<Vec<String>>>();
        Self::from_lines(lines.map_err(read_error)?)
    }

    pub fn from_lines<I, S>(lines: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = match line.find('=') {
                Some(pos) => (line[..pos].trim(), parse_value(&line[pos + 1..])),
                None => continue,
            };

            match key {
                "RESOURCE_DIR" => config.resource_dir = value.into(),
                "COUNTRY_CODES" => config.country_codes = value.into(),
                "LANGUAGE_CODES" => config.language_codes = value.into(),
                "TRANSLATIONS" => config.translations = value.into(),
                "KEY_FIELD" => {
                    config.key_field = value.parse().map_err(|why| ConfigError::KeyField { why })?
                }
                _ => debug!("ignoring unknown config key '{}'", key),
            }
        }

        Ok(config)
    }

    /// A provider that resolves resources inside `resource_dir`.
    pub fn provider(&self) -> DirectoryProvider { DirectoryProvider::new(&self.resource_dir) }
}

fn parse_value(value: &str) -> &str {
    let value = value.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    extern crate tempdir;
    use self::tempdir::TempDir;
    use super::*;
    use std::{fs::File, io::Write};

    const EXAMPLE: &str = r#"# lookup configuration
RESOURCE_DIR=/usr/share/country-lookup
COUNTRY_CODES = "codes.txt"
TRANSLATIONS="world.json"
KEY_FIELD=alpha2
UNRELATED=value
not a pair
"#;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.resource_dir, PathBuf::from("resources"));
        assert_eq!(config.country_codes, "country-codes.txt");
        assert_eq!(config.language_codes, "language-codes.txt");
        assert_eq!(config.translations, "sample.json");
        assert_eq!(config.key_field, KeyField::Alpha3);
        assert_eq!(config.provider().root(), Path::new("resources"));
    }

    #[test]
    fn config_lines() {
        assert_eq!(
            Config::from_lines(EXAMPLE.lines()).unwrap(),
            Config {
                resource_dir:   "/usr/share/country-lookup".into(),
                country_codes:  "codes.txt".into(),
                language_codes: "language-codes.txt".into(),
                translations:   "world.json".into(),
                key_field:      KeyField::Alpha2,
            }
        );
    }

    #[test]
    fn invalid_key_field() {
        match Config::from_lines(vec!["KEY_FIELD=numeric"]) {
            Err(ConfigError::KeyField { why }) => assert_eq!(why.field, "numeric"),
            other => panic!("expected a key field error, got {:?}", other),
        }
    }

    #[test]
    fn quotes_are_stripped_in_pairs() {
        assert_eq!(parse_value(" \"sample.json\" "), "sample.json");
        assert_eq!(parse_value("\""), "\"");
        assert_eq!(parse_value("plain"), "plain");
    }

    #[test]
    fn config_file() {
        let tempdir = TempDir::new("country_lookup").unwrap();
        let path = &tempdir.path().join("lookup.conf");

        {
            let mut file = File::create(path).unwrap();
            file.write_all(EXAMPLE.as_bytes()).unwrap();
        }

        assert_eq!(Config::from_file(path).unwrap().translations, "world.json");

        match Config::from_file(tempdir.path().join("missing.conf")) {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, tempdir.path().join("missing.conf"))
            }
            other => panic!("expected a read error, got {:?}", other),
        }
    }
}
