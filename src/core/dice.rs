//! Single six-sided die value.

use serde::{Deserialize, Serialize};

/// A rolled die face, always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceValue(u8);

impl DiceValue {
    /// The only face that releases a piece from base and grants another roll.
    pub const SIX: DiceValue = DiceValue(6);

    /// Create a die value. Returns `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == 6
    }
}

impl TryFrom<u8> for DiceValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DiceValue::new(value).ok_or_else(|| format!("die value {value} out of range"))
    }
}

impl From<DiceValue> for u8 {
    fn from(value: DiceValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DiceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
