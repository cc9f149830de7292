use tracing::{debug, instrument};

use crate::error::Result;
use crate::matcher::canonicalize;
use crate::model::{MemberRow, Person, TeamRow};
use crate::postgrest::{Query, RestClient};

pub(crate) const MEMBERS_TABLE: &str = "leden";
pub(crate) const TEAMS_TABLE: &str = "teams";

const MEMBER_COLUMNS: &str = "voornaam,tussenvoegsel,achternaam,team,nbb_nummer";

/// Members whose team label contains `marker`, sorted by team then last name.
#[instrument(skip(client))]
pub(crate) async fn get_members_in_teams_containing(
    client: &RestClient,
    marker: &str,
) -> Result<Vec<Person>> {
    let query = Query::select(MEMBER_COLUMNS).contains("team", marker);
    let rows: Vec<MemberRow> = client.select(MEMBERS_TABLE, &query).await?;
    let fetched = rows.len();
    let members = sort_members(parse_members(rows));
    debug!(
        fetched,
        count = members.len(),
        marker,
        "parsed member list"
    );
    Ok(members)
}

#[instrument(skip(client))]
pub(crate) async fn get_team_names(
    client: &RestClient,
    category: &str,
    season: &str,
) -> Result<Vec<String>> {
    let query = Query::select("naam")
        .eq("categorie", category)
        .eq("seizoen", season)
        .order("naam.asc");
    let rows: Vec<TeamRow> = client.select(TEAMS_TABLE, &query).await?;
    let mut names = rows
        .into_iter()
        .filter_map(|row| row.naam)
        .map(|naam| naam.trim().to_string())
        .filter(|naam| !naam.is_empty())
        .collect::<Vec<_>>();
    names.sort();
    debug!(count = names.len(), category, season, "parsed team names");
    Ok(names)
}

/// Convert rows to persons, dropping rows without a first or last name.
pub(crate) fn parse_members(rows: Vec<MemberRow>) -> Vec<Person> {
    rows.into_iter()
        .filter_map(|row| match Person::try_from(row) {
            Ok(person) => Some(person),
            Err(err) => {
                debug!(error = %err, "skipping member row");
                None
            }
        })
        .collect()
}

/// Stable sort by (team, last name); ties keep backend order.
///
/// Team codes compare case-insensitively.
pub(crate) fn sort_members(mut members: Vec<Person>) -> Vec<Person> {
    members.sort_by_cached_key(|p| (canonicalize(&p.team), p.last_name.clone()));
    members
}
