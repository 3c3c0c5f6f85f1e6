//! Five-point ordinal scale shared by mood, stress, and workload.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// One step on the self-assessment scale.
///
/// Wire format: integer rank 1–5. The same scale backs all three metrics;
/// for mood, rank 1 reads "very bad" and rank 5 "very good".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Level {
    VeryLow = 1,
    Low = 2,
    Moderate = 3,
    High = 4,
    VeryHigh = 5,
}

impl Level {
    /// Convert from an integer rank. Returns `None` outside 1–5.
    pub fn from_rank(v: i16) -> Option<Self> {
        match v {
            1 => Some(Self::VeryLow),
            2 => Some(Self::Low),
            3 => Some(Self::Moderate),
            4 => Some(Self::High),
            5 => Some(Self::VeryHigh),
            _ => None,
        }
    }

    /// Integer rank, 1–5.
    pub fn rank(self) -> i16 {
        self as i16
    }
}

/// Rank at or above which a stress/workload mean counts as elevated.
pub const HIGH_RANK: f64 = Level::High as i16 as f64;

/// Rank at or below which a mood mean counts as depressed.
pub const LOW_RANK: f64 = Level::Low as i16 as f64;

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i16(self.rank())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = i16::deserialize(d)?;
        Level::from_rank(v)
            .ok_or_else(|| de::Error::custom(format!("level rank out of range 1-5: {v}")))
    }
}
