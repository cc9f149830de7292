use club_rota::{canonicalize, group_by_team, team_matches, Person, TeamCode, UNKNOWN_TEAM};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn arb_code() -> impl Strategy<Value = TeamCode> {
    proptest::sample::select(TeamCode::iter().collect::<Vec<_>>())
}

fn arb_separator() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(vec!["", " ", "-", " - ", "  -  ", "\t"])
}

/// Flip the case of each character according to `mask`.
fn mix_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn arb_person() -> impl Strategy<Value = Person> {
    (
        "[A-Z][a-z]{1,8}",
        proptest::option::of(prop_oneof![Just("van"), Just("de"), Just("van der"), Just("")]),
        "[A-Z][a-z]{1,10}",
        prop_oneof![
            Just(String::new()),
            Just("  ".to_string()),
            arb_code().prop_map(|c| c.to_string()),
        ],
    )
        .prop_map(|(first, infix, last, team)| Person::new(first, infix, last, team))
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(s in "[ -~éëïöüĳ\t]{0,40}") {
        let once = canonicalize(&s);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn decorated_labels_match_their_code(
        code in arb_code(),
        club in "[A-Za-z' ]{0,15}",
        separator in arb_separator(),
        stars in 0usize..4,
        trailing in "[ ]{0,2}",
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let label = format!(
            "{}{}{}{}{}",
            club,
            separator,
            mix_case(&code.to_string(), &mask),
            "*".repeat(stars),
            trailing
        );
        prop_assert!(team_matches(&label, &code.to_string()), "{label:?} vs {code}");
        prop_assert!(team_matches(&label, &code.to_string().to_lowercase()));
    }

    #[test]
    fn empty_arguments_never_match(s in "[ -~]{0,20}") {
        prop_assert!(!team_matches("", &s));
        prop_assert!(!team_matches(&s, ""));
    }

    #[test]
    fn group_by_team_partitions_input(players in proptest::collection::vec(arb_person(), 0..30)) {
        let groups = group_by_team(players.clone());

        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, players.len());

        for (team, bucket) in &groups {
            let expected = players
                .iter()
                .filter(|p| match p.team.trim() {
                    "" => team == UNKNOWN_TEAM,
                    t => t == team,
                })
                .cloned()
                .collect::<Vec<_>>();
            prop_assert_eq!(bucket, &expected);
        }
    }

    #[test]
    fn full_names_are_single_spaced(person in arb_person()) {
        prop_assert_eq!(person.full_name.trim(), person.full_name.as_str());
        prop_assert!(!person.full_name.contains("  "));
        prop_assert!(person.full_name.starts_with(&person.first_name));
        prop_assert!(person.full_name.ends_with(&person.last_name));
    }
}
