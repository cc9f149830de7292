use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::RotaError;

/// A club member as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    #[serde(rename = "voornaam")]
    pub first_name: String,
    #[serde(rename = "tussenvoegsel")]
    pub infix: Option<String>,
    #[serde(rename = "achternaam")]
    pub last_name: String,
    #[serde(rename = "naam")]
    pub full_name: String,
    pub team: String,
    #[serde(rename = "nbb_nummer")]
    pub nbb_number: Option<String>,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        infix: Option<&str>,
        last_name: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let infix = infix
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let full_name = full_name(&first_name, infix.as_deref(), &last_name);
        Self {
            first_name,
            infix,
            last_name,
            full_name,
            team: team.into(),
            nbb_number: None,
        }
    }

    pub fn with_nbb_number(mut self, nbb_number: impl Into<String>) -> Self {
        self.nbb_number = Some(nbb_number.into());
        self
    }
}

/// Join the non-empty parts of a name with single spaces.
///
/// ```
/// assert_eq!(club_rota::model::full_name(" Jan ", Some("van der"), "Berg"), "Jan van der Berg");
/// assert_eq!(club_rota::model::full_name("Jan", Some("  "), "Berg"), "Jan Berg");
/// ```
pub fn full_name(first_name: &str, infix: Option<&str>, last_name: &str) -> String {
    [Some(first_name), infix, Some(last_name)]
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .join(" ")
}

/// The directory stores federation numbers both as text and as integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum NbbNumber {
    Text(String),
    Number(i64),
}

impl NbbNumber {
    fn into_string(self) -> Option<String> {
        match self {
            NbbNumber::Text(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            NbbNumber::Number(n) => Some(n.to_string()),
        }
    }
}

/// Raw `leden` row as returned by the directory.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MemberRow {
    pub voornaam: Option<String>,
    pub tussenvoegsel: Option<String>,
    pub achternaam: Option<String>,
    pub team: Option<String>,
    pub nbb_nummer: Option<NbbNumber>,
}

fn required(value: Option<String>, field: &str) -> Result<String, RotaError> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RotaError::MalformedRow {
            table: "leden",
            reason: format!("missing {field}"),
        })
}

impl TryFrom<MemberRow> for Person {
    type Error = RotaError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let first_name = required(row.voornaam, "voornaam")?;
        let last_name = required(row.achternaam, "achternaam")?;
        let team = row.team.map(|t| t.trim().to_string()).unwrap_or_default();
        let mut person = Person::new(first_name, row.tussenvoegsel.as_deref(), last_name, team);
        person.nbb_number = row.nbb_nummer.and_then(NbbNumber::into_string);
        Ok(person)
    }
}
