use fairway_core::ScoringMethod;
use fairway_core::scorecard::Scorecard;
use fairway_core::test_helpers::{make_handicap_scorecard, par_72_holes};
use fairway_engine::calculate_leaderboard;
use proptest::prelude::*;

fn method_strategy() -> impl Strategy<Value = ScoringMethod> {
    prop_oneof![
        Just(ScoringMethod::StrokePlay),
        Just(ScoringMethod::MatchPlay),
        Just(ScoringMethod::Stableford),
        Just(ScoringMethod::Skins),
    ]
}

/// 1-5 players on the par-72 layout; 0 strokes marks an unplayed hole.
fn field_strategy() -> impl Strategy<Value = Vec<Scorecard>> {
    proptest::collection::vec(
        (proptest::collection::vec(0u32..9, 18), -2i32..40),
        1..6,
    )
    .prop_map(|cards| {
        let holes = par_72_holes();
        cards
            .into_iter()
            .enumerate()
            .map(|(i, (strokes, handicap))| {
                make_handicap_scorecard(&format!("p{i}"), &holes, &strokes, handicap)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranking_is_total_and_consistent(
        cards in field_strategy(),
        method in method_strategy(),
        include_handicap in proptest::bool::ANY,
    ) {
        let result = calculate_leaderboard(&cards, method, include_handicap).unwrap();
        prop_assert_eq!(result.entries.len(), cards.len());
        prop_assert_eq!(result.entries[0].position, 1);

        for pair in result.entries.windows(2) {
            prop_assert!(pair[0].position <= pair[1].position);
            prop_assert_eq!(
                pair[0].score == pair[1].score,
                pair[0].position == pair[1].position
            );
        }
        for entry in &result.entries {
            let better = result
                .entries
                .iter()
                .filter(|other| match method {
                    ScoringMethod::StrokePlay => other.score < entry.score,
                    _ => other.score > entry.score,
                })
                .count();
            prop_assert_eq!(entry.position as usize, better + 1);
        }
    }

    #[test]
    fn output_is_reproducible_and_input_untouched(
        cards in field_strategy(),
        method in method_strategy(),
        include_handicap in proptest::bool::ANY,
    ) {
        let snapshot = cards.clone();
        let first = calculate_leaderboard(&cards, method, include_handicap).unwrap();
        let second = calculate_leaderboard(&cards, method, include_handicap).unwrap();

        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        prop_assert_eq!(cards, snapshot);
    }

    #[test]
    fn sort_direction_matches_format(
        cards in field_strategy(),
        method in method_strategy(),
    ) {
        let result = calculate_leaderboard(&cards, method, false).unwrap();
        let expected = if method == ScoringMethod::StrokePlay { "\"asc\"" } else { "\"desc\"" };
        prop_assert_eq!(serde_json::to_string(&result.metadata.sort_direction).unwrap(), expected);
    }

    #[test]
    fn skins_awarded_never_exceed_holes(cards in field_strategy()) {
        let result = calculate_leaderboard(&cards, ScoringMethod::Skins, true).unwrap();
        let awarded: f64 = result.entries.iter().map(|e| e.score).sum();
        let carried = f64::from(result.metadata.carried_skins.unwrap_or(0));
        prop_assert!(awarded + carried <= 18.0);
    }
}
