use std::{fmt, str::FromStr};

/// Fields of a translation record that describe the record rather than a language.
pub const RESERVED_KEYS: [&str; 3] = ["id", "alpha2", "alpha3"];

/// The record field that a translation record is keyed by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyField {
    /// Two-letter ISO 3166-1 code.
    Alpha2,
    /// Three-letter ISO 3166-1 code.
    Alpha3,
}

impl KeyField {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyField::Alpha2 => "alpha2",
            KeyField::Alpha3 => "alpha3",
        }
    }
}

impl Default for KeyField {
    fn default() -> Self { KeyField::Alpha3 }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Fail, PartialEq)]
#[fail(display = "'{}' is not a key field: expected 'alpha2' or 'alpha3'", field)]
pub struct UnknownKeyField {
    pub field: String,
}

impl FromStr for KeyField {
    type Err = UnknownKeyField;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "alpha2" => Ok(KeyField::Alpha2),
            "alpha3" => Ok(KeyField::Alpha3),
            _ => Err(UnknownKeyField { field: input.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_field() {
        assert_eq!("alpha2".parse(), Ok(KeyField::Alpha2));
        assert_eq!("ALPHA3".parse(), Ok(KeyField::Alpha3));
        assert_eq!(
            "numeric".parse::<KeyField>(),
            Err(UnknownKeyField { field: "numeric".into() })
        );
    }

    #[test]
    fn key_fields_are_reserved() {
        for key in &[KeyField::Alpha2, KeyField::Alpha3] {
            assert!(RESERVED_KEYS.contains(&key.as_str()));
            assert_eq!(key.to_string(), key.as_str());
        }
        assert_eq!(KeyField::default(), KeyField::Alpha3);
    }
}
