//! Pure team-label matching and roster grouping.
//!
//! The planner emits decorated labels such as `"Waterdragers - M18-3**"` while
//! people identify by bare codes such as `"M18-3"`. Matching is a substring
//! test on canonicalized strings, which is exact as long as no recognized team
//! code is a substring of another.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::model::{Match, Person, TeamCode, UNKNOWN_TEAM};

/// Upper-case, drop every `*`, trim.
///
/// ```
/// assert_eq!(club_rota::canonicalize(" waterdragers - m18-3** "), "WATERDRAGERS - M18-3");
/// ```
pub fn canonicalize(label: &str) -> String {
    label.to_uppercase().replace('*', "").trim().to_string()
}

/// Whether the decorated `full_label` belongs to the team `own_code`.
///
/// ```
/// use club_rota::team_matches;
///
/// assert!(team_matches("Waterdragers - M18-3**", "m18-3"));
/// assert!(!team_matches("Waterdragers - M18-1**", "M18-3"));
/// assert!(!team_matches("", "M18-3"));
/// ```
pub fn team_matches(full_label: &str, own_code: &str) -> bool {
    if full_label.is_empty() || own_code.is_empty() {
        return false;
    }
    canonicalize(full_label).contains(&canonicalize(own_code))
}

/// The recognized team code a decorated label refers to, if any.
pub fn recognize_code(label: &str) -> Option<TeamCode> {
    TeamCode::iter().find(|code| team_matches(label, &code.to_string()))
}

/// Bucket players by team code, keeping input order inside each bucket.
///
/// Players without a team end up under [`UNKNOWN_TEAM`].
pub fn group_by_team<I>(players: I) -> BTreeMap<String, Vec<Person>>
where
    I: IntoIterator<Item = Person>,
{
    let mut groups: BTreeMap<String, Vec<Person>> = BTreeMap::new();
    for player in players {
        let team = match player.team.trim() {
            "" => UNKNOWN_TEAM.to_string(),
            team => team.to_string(),
        };
        groups.entry(team).or_default().push(player);
    }
    groups
}

/// Matches whose home team is `own_code`, in their original order.
pub fn filter_for_team<'a, I>(matches: I, own_code: &str) -> Vec<Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    matches
        .into_iter()
        .filter(|m| team_matches(&m.home_team, own_code))
        .cloned()
        .collect()
}
