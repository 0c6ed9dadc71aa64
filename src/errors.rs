use code_names::CodeNameError;
use std::{io, path::PathBuf};
use translations::{TranslationError, UnknownKeyField};

pub trait IoContext<T> {
    fn with_context<F: FnMut(io::Error) -> String>(self, func: F) -> io::Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn with_context<F: FnMut(io::Error) -> String>(self, mut func: F) -> io::Result<T> {
        self.map_err(|why| io::Error::new(why.kind(), func(why)))
    }
}

/// A resource that failed to load while constructing a `CountryLookup`.
#[rustfmt::skip]
#[derive(Debug, Fail)]
pub enum LookupError {
    #[fail(display = "unable to load country codes from '{}': {}", resource, why)]
    CountryCodes { resource: String, why: CodeNameError },
    #[fail(display = "unable to load language codes from '{}': {}", resource, why)]
    LanguageCodes { resource: String, why: CodeNameError },
    #[fail(display = "unable to load translations from '{}': {}", resource, why)]
    Translations { resource: String, why: TranslationError },
}

#[derive(Debug, Fail)]
pub enum ConfigError {
    #[fail(display = "unable to read config at {:?}: {}", path, why)]
    Read { path: PathBuf, why: io::Error },
    #[fail(display = "invalid KEY_FIELD in config: {}", why)]
    KeyField { why: UnknownKeyField },
}
