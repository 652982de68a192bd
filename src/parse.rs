use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use std::error::Error;

use crate::{IntegerTypeCase, Width};

impl FromStr for IntegerTypeCase {
    type Err = ParseError;

    /// Parse a `<cstdint>` type name such as `int16_t` or `uint64_t`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        macro_rules! yeet {
            ($e:expr) => {
                return Err(ParseError { kind: $e })
            };
        }

        let (signed, rest) = if let Some(rest) = s.strip_prefix("uint") {
            (false, rest)
        } else if let Some(rest) = s.strip_prefix("int") {
            (true, rest)
        } else {
            yeet!(ParseErrorKind::UnknownPrefix);
        };

        let Some(bits) = rest.strip_suffix("_t") else {
            yeet!(ParseErrorKind::MissingSuffix);
        };

        let width = match bits {
            "8" => Width::Fixed8,
            "16" => Width::Fixed16,
            "32" => Width::Fixed32,
            "64" => Width::Fixed64,
            _ => yeet!(ParseErrorKind::InvalidWidth),
        };

        Ok(Self::new(signed, width))
    }
}

/// An error which can be returned when parsing an integer type name.
///
/// This is the error type of the [`FromStr`] implementation of [`IntegerTypeCase`].
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    /// Gives the cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ParseErrorKind::UnknownPrefix => {
                f.write_str("type name must start with `int` or `uint`")
            }
            ParseErrorKind::MissingSuffix => f.write_str("type name must end with `_t`"),
            ParseErrorKind::InvalidWidth => {
                f.write_str("integer width must be one of 8, 16, 32 or 64")
            }
        }
    }
}

impl Error for ParseError {}

/// The cause of the failure to parse the type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The name starts with neither `int` nor `uint`.
    #[non_exhaustive]
    UnknownPrefix,
    /// The name does not end in `_t`.
    #[non_exhaustive]
    MissingSuffix,
    /// The digits between the prefix and the suffix are not a supported width.
    ///
    /// This includes an empty width (`int_t`), signs (`int+8_t`) and leading zeros (`int08_t`).
    #[non_exhaustive]
    InvalidWidth,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(s: &str) -> ParseErrorKind {
        s.parse::<IntegerTypeCase>().unwrap_err().kind()
    }

    #[test]
    fn display_round_trips() {
        for case in IntegerTypeCase::ALL {
            assert_eq!(case.to_string().parse::<IntegerTypeCase>().unwrap(), case);
        }
    }

    #[test]
    fn parse() {
        assert_eq!(
            "uint32_t".parse::<IntegerTypeCase>().unwrap(),
            IntegerTypeCase::new(false, Width::Fixed32)
        );
        assert_eq!(
            "int8_t".parse::<IntegerTypeCase>().unwrap(),
            IntegerTypeCase::new(true, Width::Fixed8)
        );
    }

    #[test]
    fn errors() {
        use ParseErrorKind::*;

        assert_eq!(kind(""), UnknownPrefix);
        assert_eq!(kind("i32"), UnknownPrefix);
        assert_eq!(kind("Int32_t"), UnknownPrefix);
        assert_eq!(kind("sint32_t"), UnknownPrefix);
        assert_eq!(kind("int32"), MissingSuffix);
        assert_eq!(kind("uint64_t "), MissingSuffix);
        assert_eq!(kind("int_t"), InvalidWidth);
        assert_eq!(kind("int128_t"), InvalidWidth);
        assert_eq!(kind("uint+8_t"), InvalidWidth);
        assert_eq!(kind("int08_t"), InvalidWidth);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            "float".parse::<IntegerTypeCase>().unwrap_err().to_string(),
            "type name must start with `int` or `uint`"
        );
    }
}
