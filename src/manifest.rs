use num_bigint::BigInt;

use crate::{IntegerTypeCase, EXTENT};

/// A dataset the generated program writes, as a reader of the output file should find it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(serde1::Serialize))]
#[cfg_attr(feature = "serde1", serde(crate = "serde1"))]
pub struct ExpectedDataset {
    /// The type the dataset was created with.
    #[cfg_attr(feature = "serde1", serde(rename = "type"))]
    pub case: IntegerTypeCase,
    /// The dataset's path within the file. Always the type name.
    pub name: &'static str,
    /// The single dimension of the dataset.
    pub extent: usize,
    /// The stored elements, `[min, max]`.
    pub values: [BigInt; EXTENT],
}

impl From<IntegerTypeCase> for ExpectedDataset {
    fn from(case: IntegerTypeCase) -> Self {
        Self {
            case,
            name: case.type_name(),
            extent: EXTENT,
            values: [case.min_value(), case.max_value()],
        }
    }
}

/// The datasets of the fixture file, in the order they are written.
#[must_use]
pub fn expected_datasets() -> Vec<ExpectedDataset> {
    IntegerTypeCase::ALL
        .into_iter()
        .map(ExpectedDataset::from)
        .collect()
}
