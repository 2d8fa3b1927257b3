use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Brazilian company tax identifier (CNPJ).
///
/// Stored as exactly 14 ASCII digits. Formatting characters commonly typed
/// by users ("12.345.678/0001-90") are stripped before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cnpj(String);

/// Rejected CNPJ input. `Display` carries the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("CNPJ deve ter 14 dígitos numéricos")]
pub struct InvalidCnpj;

impl Cnpj {
    pub const DIGITS: usize = 14;

    /// Parses free-typed input: non-digit characters are filtered out first,
    /// then the remainder must be exactly 14 digits.
    pub fn parse(raw: &str) -> Result<Self, InvalidCnpj> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != Self::DIGITS {
            return Err(InvalidCnpj);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Cnpj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_digits() {
        let cnpj = Cnpj::parse("12345678000190").unwrap();
        assert_eq!(cnpj.as_str(), "12345678000190");
    }

    #[test]
    fn parse_strips_formatting_characters() {
        let cnpj = Cnpj::parse("12.345.678/0001-90").unwrap();
        assert_eq!(cnpj.as_str(), "12345678000190");
    }

    #[test]
    fn parse_rejects_too_few_digits() {
        assert_eq!(Cnpj::parse("123"), Err(InvalidCnpj));
    }

    #[test]
    fn parse_rejects_too_many_digits() {
        assert_eq!(Cnpj::parse("123456780001901"), Err(InvalidCnpj));
    }

    #[test]
    fn parse_rejects_letters_padding_the_count() {
        // letters are filtered out, so the digit count comes up short
        assert_eq!(Cnpj::parse("1234567800019a"), Err(InvalidCnpj));
    }
}
