//! Database actions, shipment types, and engine option enums.
//!
//! Wire-facing enums keep the backend's `SCREAMING_SNAKE_CASE` codes; engine
//! options use `snake_case` so they read naturally in TOML and on the CLI.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DbAction
// ---------------------------------------------------------------------------

/// The change-tracking action that produced an audit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DbAction {
    Insert,
    Update,
    Delete,
}

impl DbAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for DbAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INSERT" => Ok(Self::Insert),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(CoreError::Validation(format!("unknown database action: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// ShipmentType
// ---------------------------------------------------------------------------

/// Kind of shipment a history row refers to.
///
/// Context rows carry the raw code in `shipment_type`; [`ShipmentType::label`]
/// is the short form used in "HHG shipment #ABC12" style headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentType {
    Hhg,
    Ppm,
    HhgIntoNts,
    HhgOutofNts,
    MobileHome,
    BoatHaulAway,
    BoatTowAway,
    UnaccompaniedBaggage,
}

impl ShipmentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hhg => "HHG",
            Self::Ppm => "PPM",
            Self::HhgIntoNts => "HHG_INTO_NTS",
            Self::HhgOutofNts => "HHG_OUTOF_NTS",
            Self::MobileHome => "MOBILE_HOME",
            Self::BoatHaulAway => "BOAT_HAUL_AWAY",
            Self::BoatTowAway => "BOAT_TOW_AWAY",
            Self::UnaccompaniedBaggage => "UNACCOMPANIED_BAGGAGE",
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hhg => "HHG",
            Self::Ppm => "PPM",
            Self::HhgIntoNts => "NTS",
            Self::HhgOutofNts => "NTS-release",
            Self::MobileHome => "Mobile Home",
            Self::BoatHaulAway => "Boat Haul-Away",
            Self::BoatTowAway => "Boat Tow-Away",
            Self::UnaccompaniedBaggage => "UB",
        }
    }

    /// Look up a shipment type by its backend code.
    ///
    /// The older `HHG_INTO_NTS_DOMESTIC` / `HHG_OUTOF_NTS_DOMESTIC` codes still
    /// appear in historical rows and map to the same variants.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HHG" => Some(Self::Hhg),
            "PPM" => Some(Self::Ppm),
            "HHG_INTO_NTS" | "HHG_INTO_NTS_DOMESTIC" => Some(Self::HhgIntoNts),
            "HHG_OUTOF_NTS" | "HHG_OUTOF_NTS_DOMESTIC" => Some(Self::HhgOutofNts),
            "MOBILE_HOME" => Some(Self::MobileHome),
            "BOAT_HAUL_AWAY" => Some(Self::BoatHaulAway),
            "BOAT_TOW_AWAY" => Some(Self::BoatTowAway),
            "UNACCOMPANIED_BAGGAGE" => Some(Self::UnaccompaniedBaggage),
            _ => None,
        }
    }
}

impl fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| CoreError::Validation(format!("unknown shipment type: {s}")))
    }
}

// ---------------------------------------------------------------------------
// MatchStrategy
// ---------------------------------------------------------------------------

/// How the registry picks a template when several match one record.
///
/// ```text
/// most_specific: highest number of concrete pattern fields wins,
///                ties go to the earlier registration
/// first_match:   earliest registration wins
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    #[default]
    MostSpecific,
    FirstMatch,
}

impl MatchStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostSpecific => "most_specific",
            Self::FirstMatch => "first_match",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most_specific" => Ok(Self::MostSpecific),
            "first_match" => Ok(Self::FirstMatch),
            other => Err(CoreError::Validation(format!("unknown match strategy: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputFormat
// ---------------------------------------------------------------------------

/// Rendering mode for history rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Table => "table",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "raw" => Ok(Self::Raw),
            other => Err(CoreError::Validation(format!("unknown output format: {other}"))),
        }
    }
}
