use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deserialized through `FromStr`: case-insensitive, unknown codes map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
    // Generic positions
    DF,
    MF,
    FW,
    /// Position the roster did not recognize; rated with neutral weights.
    #[default]
    Unknown,
}

/// Rating bucket a position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Other,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            Position::LB
                | Position::CB
                | Position::RB
                | Position::LWB
                | Position::RWB
                | Position::DF
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            Position::CDM
                | Position::CM
                | Position::CAM
                | Position::LM
                | Position::RM
                | Position::MF
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::LW | Position::RW | Position::CF | Position::ST | Position::FW)
    }

    pub fn group(&self) -> PositionGroup {
        if self.is_goalkeeper() {
            PositionGroup::Goalkeeper
        } else if self.is_forward() {
            PositionGroup::Forward
        } else if self.is_midfielder() {
            PositionGroup::Midfielder
        } else if self.is_defender() {
            PositionGroup::Defender
        } else {
            PositionGroup::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::LWB => "LWB",
            Position::RWB => "RWB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::CF => "CF",
            Position::ST => "ST",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
            Position::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for Position {
    type Err = std::convert::Infallible;

    /// Never fails: unrecognized codes become `Position::Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position = match s.trim().to_ascii_uppercase().as_str() {
            "GK" => Position::GK,
            "LB" => Position::LB,
            "CB" => Position::CB,
            "RB" => Position::RB,
            "LWB" => Position::LWB,
            "RWB" => Position::RWB,
            "CDM" | "DM" => Position::CDM,
            "CM" => Position::CM,
            "CAM" | "AM" => Position::CAM,
            "LM" => Position::LM,
            "RM" => Position::RM,
            "LW" => Position::LW,
            "RW" => Position::RW,
            "CF" => Position::CF,
            "ST" => Position::ST,
            "DF" => Position::DF,
            "MF" => Position::MF,
            "FW" => Position::FW,
            _ => Position::Unknown,
        };
        Ok(position)
    }
}

impl From<String> for Position {
    fn from(code: String) -> Self {
        match code.parse() {
            Ok(position) => position,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
