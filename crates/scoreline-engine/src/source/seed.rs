use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic sample generation and shuffling.
///
/// A 128-bit (16-byte) seed for the random number generator behind a source.
/// The same seed yields the same sequence of samples, which makes games
/// reproducible for testing and simulation.
///
/// Seeds are written as 32 hex characters, both in JSON and on the command line.
///
/// # Example
///
/// ```
/// use scoreline_engine::{SampleSource, SourceSeed, SyntheticSource};
/// use rand::Rng as _;
///
/// let seed: SourceSeed = rand::rng().random();
///
/// let mut source1 = SyntheticSource::with_seed(seed);
/// let mut source2 = SyntheticSource::with_seed(seed);
/// assert_eq!(source1.next_sample()?, source2.next_sample()?);
/// # Ok::<(), scoreline_engine::SampleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSeed([u8; 16]);

impl SourceSeed {
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl From<u128> for SourceSeed {
    fn from(num: u128) -> Self {
        Self(num.to_be_bytes())
    }
}

impl fmt::Display for SourceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    InvalidLength {
        #[error(not(source))]
        len: usize,
    },
    #[display("invalid hex: {input}")]
    InvalidDigit {
        input: String,
        source: std::num::ParseIntError,
    },
}

impl FromStr for SourceSeed {
    type Err = ParseSeedError;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        if hex_str.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: hex_str.len() });
        }
        let num = u128::from_str_radix(hex_str, 16).map_err(|source| {
            ParseSeedError::InvalidDigit {
                input: hex_str.to_owned(),
                source,
            }
        })?;
        Ok(Self::from(num))
    }
}

impl Serialize for SourceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SourceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SourceSeed` values with `rng.random()`.
impl Distribution<SourceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SourceSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_32_char_hex_string() {
        let seed: SourceSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let hex_str = serialized.trim_matches('"');
        assert_eq!(hex_str.len(), 32);
        assert!(hex_str.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_value_is_big_endian() {
        let seed = SourceSeed::from(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210_u128);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!(seed.to_bytes()[0], 0x01);
        assert_eq!(seed.to_bytes()[15], 0x10);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: SourceSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert_eq!(
            "abc".parse::<SourceSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "0123456789abcdefghijklmnopqrstuv".parse::<SourceSeed>(),
            Err(ParseSeedError::InvalidDigit { .. })
        ));
        assert!(serde_json::from_str::<SourceSeed>("\"00\"").is_err());
    }

    #[test]
    fn test_json_roundtrip_of_random_seed() {
        let seed: SourceSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: SourceSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed, deserialized);
    }
}
