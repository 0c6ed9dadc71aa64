use resources::ResourceError;
use std::io;

/// Failures that abort the construction of a `JsonTranslator`.
#[rustfmt::skip]
#[derive(Debug, Fail)]
pub enum TranslationError {
    #[fail(display = "{}", why)]
    Resource { why: ResourceError },
    #[fail(display = "unable to read translations: {}", why)]
    Read { why: io::Error },
    #[fail(display = "translations are not a JSON array of objects: {}", why)]
    Json { why: serde_json::Error },
    #[fail(display = "record {} lacks the '{}' field", index, key)]
    MissingKey { index: usize, key: String },
    #[fail(display = "record {} has a non-string '{}' field", index, key)]
    KeyNotString { index: usize, key: String },
    #[fail(display = "record {} has a non-string translation for '{}'", index, key)]
    NotString { index: usize, key: String },
}

impl From<ResourceError> for TranslationError {
    fn from(why: ResourceError) -> Self { TranslationError::Resource { why } }
}
