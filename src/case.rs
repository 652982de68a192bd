use core::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// One fixed-width integer type exercised by the generated program.
///
/// The set of cases is closed: every value of this type is one of the entries of
/// [`IntegerTypeCase::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerTypeCase {
    signed: bool,
    width: Width,
}

impl IntegerTypeCase {
    /// Every case, in the order the generated program writes its datasets: signed before
    /// unsigned, and ascending width within each group.
    pub const ALL: [Self; 8] = [
        Self::new(true, Width::Fixed8),
        Self::new(true, Width::Fixed16),
        Self::new(true, Width::Fixed32),
        Self::new(true, Width::Fixed64),
        Self::new(false, Width::Fixed8),
        Self::new(false, Width::Fixed16),
        Self::new(false, Width::Fixed32),
        Self::new(false, Width::Fixed64),
    ];

    /// Create the case for the given signedness and width.
    #[must_use]
    pub const fn new(signed: bool, width: Width) -> Self {
        Self { signed, width }
    }

    /// Whether the type is signed.
    #[must_use]
    pub const fn signed(self) -> bool {
        self.signed
    }

    /// The width of the type.
    #[must_use]
    pub const fn width(self) -> Width {
        self.width
    }

    /// The `<cstdint>` name of the type, e.g. `uint32_t`. This is also the name of the dataset
    /// the generated program creates for it.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match (self.signed, self.width) {
            (true, Width::Fixed8) => "int8_t",
            (true, Width::Fixed16) => "int16_t",
            (true, Width::Fixed32) => "int32_t",
            (true, Width::Fixed64) => "int64_t",
            (false, Width::Fixed8) => "uint8_t",
            (false, Width::Fixed16) => "uint16_t",
            (false, Width::Fixed32) => "uint32_t",
            (false, Width::Fixed64) => "uint64_t",
        }
    }

    /// The smallest value of the type: `-2^(bits-1)` if signed, otherwise zero.
    #[must_use]
    pub fn min_value(self) -> BigInt {
        if self.signed {
            -(BigInt::one() << (self.width.bits() - 1))
        } else {
            BigInt::zero()
        }
    }

    /// The largest value of the type: `2^(bits-1) - 1` if signed, otherwise `2^bits - 1`.
    #[must_use]
    pub fn max_value(self) -> BigInt {
        let magnitude_bits = if self.signed {
            self.width.bits() - 1
        } else {
            self.width.bits()
        };
        (BigInt::one() << magnitude_bits) - 1_u8
    }

    /// The suffix appended to both literals of this case.
    ///
    /// Unsigned types take a leading `U`, 32-bit types an `L` and 64-bit types `LL`; this table is
    /// what the downstream compilers have been verified against, so keep it as is.
    #[must_use]
    pub const fn literal_suffix(self) -> &'static str {
        match (self.signed, self.width) {
            (true, Width::Fixed8 | Width::Fixed16) => "",
            (true, Width::Fixed32) => "L",
            (true, Width::Fixed64) => "LL",
            (false, Width::Fixed8 | Width::Fixed16) => "U",
            (false, Width::Fixed32) => "UL",
            (false, Width::Fixed64) => "ULL",
        }
    }

    /// The C++ literal for [`min_value`](Self::min_value), suffix included.
    #[must_use]
    pub fn min_literal(self) -> Literal {
        Literal {
            value: self.min_value(),
            suffix: self.literal_suffix(),
        }
    }

    /// The C++ literal for [`max_value`](Self::max_value), suffix included.
    #[must_use]
    pub fn max_literal(self) -> Literal {
        Literal {
            value: self.max_value(),
            suffix: self.literal_suffix(),
        }
    }
}

impl Display for IntegerTypeCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The bit width of an [`IntegerTypeCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 8 bits.
    Fixed8,
    /// 16 bits.
    Fixed16,
    /// 32 bits.
    Fixed32,
    /// 64 bits.
    Fixed64,
}

impl Width {
    /// All widths, ascending.
    pub const ALL: [Self; 4] = [Self::Fixed8, Self::Fixed16, Self::Fixed32, Self::Fixed64];

    /// The number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Fixed8 => 8,
            Self::Fixed16 => 16,
            Self::Fixed32 => 32,
            Self::Fixed64 => 64,
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.bits(), f)
    }
}

/// A suffixed C++ integer literal such as `4294967295UL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    value: BigInt,
    suffix: &'static str,
}

impl Literal {
    /// The numeric value of the literal.
    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The literal's suffix, possibly empty.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suffix)
    }
}

// === Arbitrary ===

#[cfg(feature = "arbitrary1")]
use arbitrary1::{Arbitrary, Unstructured};

#[cfg(feature = "arbitrary1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "arbitrary")))]
impl<'a> Arbitrary<'a> for IntegerTypeCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary1::Result<Self> {
        u.choose(&Self::ALL).copied()
    }
}

#[cfg(feature = "arbitrary1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "arbitrary")))]
impl<'a> Arbitrary<'a> for Width {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary1::Result<Self> {
        u.choose(&Self::ALL).copied()
    }
}

// === Serde ===

#[cfg(feature = "serde1")]
use serde1::{de, Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
impl Serialize for IntegerTypeCase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}

#[cfg(feature = "serde1")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for IntegerTypeCase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = IntegerTypeCase;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a fixed-width integer type name such as `int32_t`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
