//! Common domain type definitions
//!
//! Demographic code enums shared across the member model and the
//! distribution summarizer. Each enum keeps the raw source code so the
//! report layer can emit the exact values the downstream dashboard expects.

/// Sex of a beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Unknown or not specified
    Unknown,
}

impl From<u8> for Sex {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl Sex {
    /// Raw source code of this value
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
            Self::Unknown => 0,
        }
    }
}

/// Race code of a beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceCode {
    /// White
    White,
    /// Black
    Black,
    /// Other race categories
    Other,
    /// Hispanic
    Hispanic,
    /// Unknown or not specified
    Unknown,
}

impl From<u8> for RaceCode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::White,
            2 => Self::Black,
            3 => Self::Other,
            5 => Self::Hispanic,
            _ => Self::Unknown,
        }
    }
}

impl RaceCode {
    /// Raw source code of this value
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 2,
            Self::Other => 3,
            Self::Hispanic => 5,
            Self::Unknown => 0,
        }
    }
}

/// Age bucket of a beneficiary at the reference year
///
/// Buckets are right-open ranges. Everyone below 65, including members
/// younger than 25, falls in the first bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeBucket {
    /// Ages below 65
    Age25To64,
    /// Ages 65 through 69
    Age65To69,
    /// Ages 70 through 74
    Age70To74,
    /// Ages 75 through 79
    Age75To79,
    /// Ages 80 through 84
    Age80To84,
    /// Ages 85 through 89
    Age85To89,
    /// Ages 90 and above
    Age90Plus,
}

impl AgeBucket {
    /// All buckets in ascending age order
    pub const ALL: [Self; 7] = [
        Self::Age25To64,
        Self::Age65To69,
        Self::Age70To74,
        Self::Age75To79,
        Self::Age80To84,
        Self::Age85To89,
        Self::Age90Plus,
    ];

    /// Bucket containing the given age
    #[must_use]
    pub const fn from_age(age: i32) -> Self {
        match age {
            i32::MIN..=64 => Self::Age25To64,
            65..=69 => Self::Age65To69,
            70..=74 => Self::Age70To74,
            75..=79 => Self::Age75To79,
            80..=84 => Self::Age80To84,
            85..=89 => Self::Age85To89,
            _ => Self::Age90Plus,
        }
    }

    /// Display label used in the distribution report
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age25To64 => "25 - 64",
            Self::Age65To69 => "65 - 69",
            Self::Age70To74 => "70 - 74",
            Self::Age75To79 => "75 - 79",
            Self::Age80To84 => "80 - 84",
            Self::Age85To89 => "85 - 89",
            Self::Age90Plus => "90+",
        }
    }
}
