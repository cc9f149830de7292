use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Match, MatchList, MatchRow, MATCH_DATE_FORMAT};
use crate::postgrest::{Query, RestClient};

pub(crate) const MATCHES_TABLE: &str = "wedstrijden";

const MATCH_COLUMNS: &str = "datum,tijd,thuisteam,uitteam,locatie";

/// Matches in `from..=to` whose home label names `club`, in chronological order.
#[instrument(skip(client))]
pub(crate) async fn get_home_matches(
    client: &RestClient,
    club: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<MatchList> {
    if from > to {
        debug!("empty date range");
        return Ok(Vec::new());
    }

    let query = Query::select(MATCH_COLUMNS)
        .gte("datum", from.format(MATCH_DATE_FORMAT))
        .lte("datum", to.format(MATCH_DATE_FORMAT))
        .icontains("thuisteam", club)
        .order("datum.asc,tijd.asc");
    let rows: Vec<MatchRow> = client.select(MATCHES_TABLE, &query).await?;
    let fetched = rows.len();
    let matches = parse_home_matches(rows, club, from, to);
    debug!(fetched, count = matches.len(), "parsed home match list");
    Ok(matches)
}

/// Parse rows, keep the club's home matches inside the range, sort by kick-off.
pub(crate) fn parse_home_matches(
    rows: Vec<MatchRow>,
    club: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> MatchList {
    let club = club.to_lowercase();
    let mut matches = rows
        .into_iter()
        .filter_map(|row| match Match::try_from(row) {
            Ok(m) => Some(m),
            Err(err) => {
                debug!(error = %err, "skipping match row");
                None
            }
        })
        .filter(|m| (from..=to).contains(&m.date))
        .filter(|m| m.home_team.to_lowercase().contains(&club))
        .collect::<Vec<_>>();
    matches.sort_by_key(|m| (m.date, m.start_time));
    matches
}
