use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::RotaError;

/// A list of matches in chronological order.
pub type MatchList = Vec<Match>;

pub(crate) const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const MATCH_TIME_FORMAT: &str = "%H:%M:%S";
pub(crate) const MATCH_TIME_FORMAT_SHORT: &str = "%H:%M";

/// A single match from the competition planner.
///
/// Team names are the planner's decorated labels, e.g. `"Waterdragers - M18-3**"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub venue: Option<String>,
}

/// Raw `wedstrijden` row as returned by the planner.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MatchRow {
    pub datum: Option<String>,
    pub tijd: Option<String>,
    pub thuisteam: Option<String>,
    pub uitteam: Option<String>,
    pub locatie: Option<String>,
}

fn malformed(reason: String) -> RotaError {
    RotaError::MalformedRow {
        table: "wedstrijden",
        reason,
    }
}

pub(crate) fn parse_match_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, MATCH_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, MATCH_TIME_FORMAT_SHORT))
        .ok()
}

impl TryFrom<MatchRow> for Match {
    type Error = RotaError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let raw_date = row.datum.unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date.trim(), MATCH_DATE_FORMAT)
            .map_err(|e| malformed(format!("datum {raw_date:?}: {e}")))?;

        let raw_time = row.tijd.unwrap_or_default();
        let start_time = parse_match_time(raw_time.trim())
            .ok_or_else(|| malformed(format!("tijd {raw_time:?} is not a wall-clock time")))?;

        let home_team = row
            .thuisteam
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| malformed("missing thuisteam".to_string()))?;

        Ok(Match {
            date,
            start_time,
            home_team,
            away_team: row.uitteam.map(|t| t.trim().to_string()).unwrap_or_default(),
            venue: row
                .locatie
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(datum: &str, tijd: &str) -> MatchRow {
        MatchRow {
            datum: Some(datum.to_string()),
            tijd: Some(tijd.to_string()),
            thuisteam: Some("Waterdragers - M18-3**".to_string()),
            uitteam: Some("Tornado's - M18-1".to_string()),
            locatie: Some(" ".to_string()),
        }
    }

    #[test]
    fn test_parse_match_row() {
        let m = Match::try_from(row("2025-11-08", "14:30:00")).unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(2025, 11, 8).unwrap());
        assert_eq!(m.start_time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(m.home_team, "Waterdragers - M18-3**");
        assert_eq!(m.venue, None);
    }

    #[test]
    fn test_short_time_format() {
        let m = Match::try_from(row("2025-11-08", "09:15")).unwrap();
        assert_eq!(m.start_time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let err = Match::try_from(row("08-11-2025", "09:15")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedRow);
    }

    #[test]
    fn test_missing_time_is_malformed() {
        let mut r = row("2025-11-08", "");
        r.tijd = None;
        assert!(Match::try_from(r).is_err());
    }
}
