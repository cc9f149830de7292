use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Season whose team assignments the directory currently holds.
pub const CURRENT_SEASON: &str = "2025-2026";

/// Bucket for players whose team is missing.
pub const UNKNOWN_TEAM: &str = "Onbekend";

/// The club's recognized team codes.
///
/// Parsing is case-insensitive; `Display` gives the canonical form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TeamCode {
    #[strum(serialize = "X14-1")]
    #[serde(rename = "X14-1")]
    X14_1,
    #[strum(serialize = "M16-1")]
    #[serde(rename = "M16-1")]
    M16_1,
    #[strum(serialize = "M16-2")]
    #[serde(rename = "M16-2")]
    M16_2,
    #[strum(serialize = "V16-1")]
    #[serde(rename = "V16-1")]
    V16_1,
    #[strum(serialize = "V16-2")]
    #[serde(rename = "V16-2")]
    V16_2,
    #[strum(serialize = "M18-1")]
    #[serde(rename = "M18-1")]
    M18_1,
    #[strum(serialize = "M18-2")]
    #[serde(rename = "M18-2")]
    M18_2,
    #[strum(serialize = "M18-3")]
    #[serde(rename = "M18-3")]
    M18_3,
    #[strum(serialize = "M20-1")]
    #[serde(rename = "M20-1")]
    M20_1,
    #[strum(serialize = "MSE")]
    #[serde(rename = "MSE")]
    Mse,
}

/// Age category of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum AgeCategory {
    U14,
    U16,
    U18,
    U20,
    Senior,
}

impl TeamCode {
    pub fn category(self) -> AgeCategory {
        match self {
            TeamCode::X14_1 => AgeCategory::U14,
            TeamCode::M16_1 | TeamCode::M16_2 | TeamCode::V16_1 | TeamCode::V16_2 => {
                AgeCategory::U16
            }
            TeamCode::M18_1 | TeamCode::M18_2 | TeamCode::M18_3 => AgeCategory::U18,
            TeamCode::M20_1 => AgeCategory::U20,
            TeamCode::Mse => AgeCategory::Senior,
        }
    }

    /// The feeder team has coaches on the roster but no players.
    pub fn fields_players(self) -> bool {
        self != TeamCode::X14_1
    }
}

/// Raw `teams` row as returned by the directory.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TeamRow {
    pub naam: Option<String>,
}
