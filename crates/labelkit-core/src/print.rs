//! Print sheet options shared by the renderer, settings and CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of label copies tiled onto one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CopiesPerPage {
    /// 2 columns x 2 rows
    Four,
    /// 2 columns x 3 rows
    #[default]
    Six,
    /// 3 columns x 4 rows
    Twelve,
}

impl CopiesPerPage {
    /// All supported counts, smallest first.
    pub const ALL: [CopiesPerPage; 3] = [Self::Four, Self::Six, Self::Twelve];

    /// Number of copies
    pub fn count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }

    /// Grid shape as (columns, rows)
    pub fn grid(self) -> (usize, usize) {
        match self {
            Self::Four => (2, 2),
            Self::Six => (2, 3),
            Self::Twelve => (3, 4),
        }
    }
}

impl TryFrom<u32> for CopiesPerPage {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            other => Err(format!(
                "Unsupported copies per page: {} (expected 4, 6 or 12)",
                other
            )),
        }
    }
}

impl From<CopiesPerPage> for u32 {
    fn from(value: CopiesPerPage) -> Self {
        value.count() as u32
    }
}

impl FromStr for CopiesPerPage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid copies per page: {}", s))?;
        Self::try_from(n)
    }
}

impl fmt::Display for CopiesPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Print density: how tightly copies are packed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintDensity {
    /// Comfortable spacing between copies
    #[default]
    Normal,
    /// Tight spacing, larger labels
    High,
}

impl PrintDensity {
    /// Gap between neighbouring copies in millimeters
    pub fn gap_mm(self) -> f64 {
        match self {
            Self::Normal => 5.0,
            Self::High => 2.0,
        }
    }
}

impl FromStr for PrintDensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown print density: {}", s)),
        }
    }
}

impl fmt::Display for PrintDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
        }
    }
}
