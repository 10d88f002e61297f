//! Shared domain enums
//!
//! Each enum serializes to the exact literal used by the backend, so values coming from
//! JSON bodies are checked once at the boundary and handled exhaustively afterwards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Physical state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Layak Pakai")]
    LayakPakai,
    #[serde(rename = "Rusak Ringan")]
    RusakRingan,
    #[serde(rename = "Rusak/Hilang")]
    RusakHilang,
}

impl Condition {
    /// Display order used by every breakdown and chart
    pub const ALL: [Condition; 3] = [
        Condition::LayakPakai,
        Condition::RusakRingan,
        Condition::RusakHilang,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::LayakPakai => "Layak Pakai",
            Condition::RusakRingan => "Rusak Ringan",
            Condition::RusakHilang => "Rusak/Hilang",
        }
    }
}

impl FromStr for Condition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("unknown condition: {}", s)))
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of a distribution (movement) record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "Gudang → OPD")]
    GudangToOpd,
    #[serde(rename = "OPD → Gudang")]
    OpdToGudang,
    #[serde(rename = "OPD → OPD")]
    OpdToOpd,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::GudangToOpd,
        Direction::OpdToGudang,
        Direction::OpdToOpd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::GudangToOpd => "Gudang → OPD",
            Direction::OpdToGudang => "OPD → Gudang",
            Direction::OpdToOpd => "OPD → OPD",
        }
    }

    /// Whether a movement in this direction must name the receiving OPD
    pub fn requires_target_opd(&self) -> bool {
        match self {
            Direction::GudangToOpd | Direction::OpdToOpd => true,
            Direction::OpdToGudang => false,
        }
    }

    /// Whether a movement in this direction must name the OPD it leaves
    pub fn requires_source_opd(&self) -> bool {
        match self {
            Direction::OpdToGudang | Direction::OpdToOpd => true,
            Direction::GudangToOpd => false,
        }
    }

    /// Location of the item once the movement is applied
    pub fn destination(&self) -> Location {
        match self {
            Direction::GudangToOpd | Direction::OpdToOpd => Location::Opd,
            Direction::OpdToGudang => Location::Gudang,
        }
    }
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("unknown direction: {}", s)))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Where an item currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Gudang,
    #[serde(rename = "OPD")]
    Opd,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Gudang => "Gudang",
            Location::Opd => "OPD",
        }
    }
}

impl FromStr for Location {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gudang" => Ok(Location::Gudang),
            "OPD" => Ok(Location::Opd),
            other => Err(AppError::Validation(format!("unknown location: {}", other))),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
