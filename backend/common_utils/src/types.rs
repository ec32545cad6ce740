//! Types that can be used in other crates

use std::{fmt, str::FromStr};

use error_stack::ResultExt;

use crate::errors::ParsingError;

/// An amount in the minor unit of its currency (cents for EUR, yen for JPY).
#[derive(
    Default,
    Debug,
    serde::Deserialize,
    serde::Serialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
)]
pub struct MinorUnit(pub i64);

impl MinorUnit {
    /// gets amount as i64 value
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    /// forms a new minor default unit i.e zero
    pub fn zero() -> Self {
        Self(0)
    }

    /// forms a new minor unit from amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinorUnit {
    type Err = error_stack::Report<ParsingError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<i64>()
            .map(Self)
            .change_context(ParsingError::StructParseFailure("MinorUnit"))
    }
}

impl From<i64> for MinorUnit {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn minor_unit_displays_without_formatting() {
        assert_eq!(MinorUnit::new(100).to_string(), "100");
        assert_eq!(MinorUnit::zero().to_string(), "0");
        assert_eq!(MinorUnit::new(-250).to_string(), "-250");
    }

    #[test]
    fn minor_unit_parses_integer_text() {
        assert_eq!(MinorUnit::from_str(" 1999 ").unwrap(), MinorUnit(1999));
        assert!(MinorUnit::from_str("19.99").is_err());
        assert!(MinorUnit::from_str("").is_err());
    }
}
