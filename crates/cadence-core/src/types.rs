//! Repeat and frequency enums shared across crates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Period of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<RepeatType>()?.frequency() {
            Some(frequency) => Ok(frequency),
            None => Err(CoreError::InvalidInput(format!(
                "'{s}' is not a recurrence frequency"
            ))),
        }
    }
}

/// Repeat setting carried by an event record.
///
/// `None` marks a standalone event; every other variant marks one instance of
/// a recurring series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[default]
    None,
}

impl RepeatType {
    /// All variants in grouping order.
    pub const ALL: [Self; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::None,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::None => "none",
        }
    }

    /// Returns the recurrence frequency, or `None` for standalone events.
    #[must_use]
    pub const fn frequency(self) -> Option<Frequency> {
        match self {
            Self::Daily => Some(Frequency::Daily),
            Self::Weekly => Some(Frequency::Weekly),
            Self::Monthly => Some(Frequency::Monthly),
            Self::Yearly => Some(Frequency::Yearly),
            Self::None => None,
        }
    }

    #[must_use]
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Position of the variant in [`RepeatType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Daily => 0,
            Self::Weekly => 1,
            Self::Monthly => 2,
            Self::Yearly => 3,
            Self::None => 4,
        }
    }
}

impl From<Frequency> for RepeatType {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Daily => Self::Daily,
            Frequency::Weekly => Self::Weekly,
            Frequency::Monthly => Self::Monthly,
            Frequency::Yearly => Self::Yearly,
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RepeatType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "none" => Ok(Self::None),
            _ => Err(CoreError::InvalidInput(format!("unknown repeat type '{s}'"))),
        }
    }
}
