//! Scoring contracts: the behaviors every scorer build must keep so that
//! saved timelines replay to the same scorecard.

use super::*;
use crate::models::{EventOpts, Extras, Match, MatchMeta, ScoringEvent, Team};

fn fresh_match(balls_per_over: u32) -> Match {
    let meta = MatchMeta { balls_per_over, ..MatchMeta::default() };
    let mut m = Match::new(meta, [Team::new("Home"), Team::new("Away")]);
    m.current_mut().batters = ["Ana".to_string(), "Ben".to_string()];
    m.current_mut().bowler = "Cal".to_string();
    m
}

fn apply(m: &mut Match, event: ScoringEvent) {
    handle_event_at(m, &event, EventOpts::default(), 1);
}

fn apply_tags(m: &mut Match, tags: &[&str]) {
    for tag in tags {
        apply(m, ScoringEvent::from(*tag));
    }
}

#[test]
fn over_rolls_over_after_six_legal_balls() {
    let mut m = fresh_match(6);
    apply_tags(&mut m, &["dot", "dot", "dot", "dot", "dot"]);
    assert_eq!(m.current().legal_balls, 5);
    assert_eq!(m.current().striker, 0);

    apply(&mut m, ScoringEvent::Dot);
    let inn = m.current();
    assert_eq!(inn.overs, 1);
    assert_eq!(inn.legal_balls, 0);
    assert!(inn.over_balls.is_empty());
    assert_eq!(inn.striker, 1);
}

#[test]
fn over_end_rotation_composes_with_run_parity() {
    let mut m = fresh_match(6);
    // one odd run during the over, then the end-of-over swap: back to slot 0
    apply_tags(&mut m, &["1", "dot", "dot", "dot", "dot", "dot"]);
    assert_eq!(m.current().overs, 1);
    assert_eq!(m.current().striker, 0);

    // odd run on the last ball: parity swap then over swap
    let mut m = fresh_match(6);
    apply_tags(&mut m, &["dot", "dot", "dot", "dot", "dot", "1"]);
    assert_eq!(m.current().striker, 0);
}

#[test]
fn no_ball_then_wicket_is_a_free_hit() {
    let mut m = fresh_match(6);
    handle_event_at(&mut m, &ScoringEvent::NoBall, EventOpts::bat_runs(0), 1);
    assert!(m.current().free_hit);

    apply(&mut m, ScoringEvent::Wicket);
    let inn = m.current();
    assert_eq!(inn.wickets, 0);
    let entry = inn.timeline.last().unwrap();
    assert!(!entry.wicket);
    assert!(entry.free_hit_wicket_ignored);
    assert!(!inn.free_hit);

    apply(&mut m, ScoringEvent::Two);
    assert!(!m.current().free_hit);

    apply(&mut m, ScoringEvent::Wicket);
    assert_eq!(m.current().wickets, 1);
}

#[test]
fn undo_restores_totals_for_every_event_kind() {
    let prefix = ["1", "noball", "4", "wide", "dot"];
    let events = [
        ScoringEvent::Dot,
        ScoringEvent::One,
        ScoringEvent::Two,
        ScoringEvent::Three,
        ScoringEvent::Four,
        ScoringEvent::Six,
        ScoringEvent::Wicket,
        ScoringEvent::Wide,
        ScoringEvent::NoBall,
        ScoringEvent::Bye,
        ScoringEvent::LegBye,
        ScoringEvent::Other("mystery".to_string()),
    ];

    for event in events {
        let mut m = fresh_match(6);
        apply_tags(&mut m, &prefix);
        let before = m.current().clone();

        handle_event_at(&mut m, &event, EventOpts::bat_runs(2), 1);
        undo(&mut m);

        let after = m.current();
        assert_eq!(after.runs, before.runs, "runs after undoing {event}");
        assert_eq!(after.wickets, before.wickets, "wickets after undoing {event}");
        assert_eq!(after.extras, before.extras, "extras after undoing {event}");
        assert_eq!(after.balls, before.balls, "balls after undoing {event}");
        assert_eq!(after.striker, before.striker, "striker after undoing {event}");
    }
}

#[test]
fn undo_of_free_hit_wicket_keeps_known_approximation() {
    let mut m = fresh_match(6);
    apply_tags(&mut m, &["noball", "wicket"]);
    undo(&mut m);
    undo(&mut m);

    let inn = m.current();
    assert_eq!(inn.runs, 0);
    assert_eq!(inn.wickets, 0);
    assert_eq!(inn.extras, Extras::default());
    assert!(!inn.free_hit);
}

#[test]
fn recalc_is_idempotent() {
    let mut m = fresh_match(6);
    apply_tags(
        &mut m,
        &["1", "noball", "wide", "4", "dot", "6", "bye", "legbye", "wicket", "2", "noball"],
    );
    let mut inn = m.current().clone();

    recalc_counts(&mut inn, 6);
    let once = inn.clone();
    recalc_counts(&mut inn, 6);

    assert_eq!(inn.balls, once.balls);
    assert_eq!(inn.overs, once.overs);
    assert_eq!(inn.legal_balls, once.legal_balls);
    assert_eq!(inn.free_hit, once.free_hit);
    assert_eq!(inn.over_balls, once.over_balls);
}

#[test]
fn single_rotates_boundary_does_not() {
    let mut m = fresh_match(6);
    assert_eq!(m.current().striker, 0);
    apply(&mut m, ScoringEvent::One);
    assert_eq!(m.current().striker, 1);
    apply(&mut m, ScoringEvent::Four);
    assert_eq!(m.current().striker, 1);
}

#[test]
fn wide_does_not_count_toward_the_over() {
    let mut m = fresh_match(6);
    apply_tags(&mut m, &["dot", "dot", "dot", "dot", "dot"]);
    assert_eq!(m.current().legal_balls, 5);

    apply(&mut m, ScoringEvent::Wide);
    let inn = m.current();
    assert_eq!(inn.legal_balls, 5);
    assert_eq!(inn.overs, 0);
    assert_eq!(inn.runs, 1);
    assert_eq!(inn.extras.wd, 1);

    apply(&mut m, ScoringEvent::Dot);
    let inn = m.current();
    assert_eq!(inn.overs, 1);
    assert_eq!(inn.legal_balls, 0);
}

#[test]
fn second_innings_target_is_first_total_plus_one() {
    let mut m = fresh_match(6);
    m.innings[0].runs = 145;
    change_innings(&mut m);
    assert_eq!(m.innings[1].target, Some(146));
    assert_eq!(m.inn_now, 1);
}

#[test]
fn symbols_match_between_live_strip_and_replay() {
    let mut m = fresh_match(6);
    handle_event_at(&mut m, &ScoringEvent::NoBall, EventOpts::bat_runs(4), 1);
    apply_tags(&mut m, &["wide", "wicket", "bye"]);

    let live = m.current().over_balls.clone();
    assert_eq!(live, vec!["nb+4", "wd", "0", "b"]);

    let mut inn = m.current().clone();
    rebuild_over_strip(&mut inn, 6);
    assert_eq!(inn.over_balls, live);
}

#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_event() -> impl Strategy<Value = ScoringEvent> {
        prop_oneof![
            Just(ScoringEvent::Dot),
            Just(ScoringEvent::One),
            Just(ScoringEvent::Two),
            Just(ScoringEvent::Three),
            Just(ScoringEvent::Four),
            Just(ScoringEvent::Six),
            Just(ScoringEvent::Wicket),
            Just(ScoringEvent::Wide),
            Just(ScoringEvent::NoBall),
            Just(ScoringEvent::Bye),
            Just(ScoringEvent::LegBye),
        ]
    }

    proptest! {
        /// Property: undoing the last delivery restores runs, wickets and extras
        #[test]
        fn prop_undo_restores_totals(
            history in prop::collection::vec(any_event(), 0..40),
            last in any_event(),
            bat_runs in prop::sample::select(vec![0u32, 1, 2, 3, 4, 6]),
        ) {
            let mut m = fresh_match(6);
            for event in &history {
                handle_event_at(&mut m, event, EventOpts::bat_runs(bat_runs), 1);
            }
            let before = m.current().clone();

            handle_event_at(&mut m, &last, EventOpts::bat_runs(bat_runs), 1);
            undo(&mut m);

            let after = m.current();
            prop_assert_eq!(after.runs, before.runs);
            prop_assert_eq!(after.wickets, before.wickets);
            prop_assert_eq!(after.extras, before.extras);
            prop_assert_eq!(after.timeline.len(), before.timeline.len());
        }

        /// Property: live counters always agree with a replay of the log
        #[test]
        fn prop_live_counters_match_replay(
            events in prop::collection::vec(any_event(), 0..80),
            balls_per_over in 1u32..=8,
        ) {
            let mut m = fresh_match(balls_per_over);
            for event in &events {
                handle_event_at(&mut m, event, EventOpts::bat_runs(1), 1);
            }
            let live = m.current().clone();
            let mut replay = live.clone();
            recalc_counts(&mut replay, balls_per_over);

            prop_assert_eq!(replay.balls, live.balls);
            prop_assert_eq!(replay.overs, live.overs);
            prop_assert_eq!(replay.legal_balls, live.legal_balls);
            prop_assert_eq!(replay.free_hit, live.free_hit);
            prop_assert!(live.legal_balls < balls_per_over);
        }

        /// Property: recalc twice yields the same counters
        #[test]
        fn prop_recalc_idempotent(events in prop::collection::vec(any_event(), 0..60)) {
            let mut m = fresh_match(6);
            for event in &events {
                handle_event_at(&mut m, event, EventOpts::default(), 1);
            }
            let mut inn = m.current().clone();
            recalc_counts(&mut inn, 6);
            let once = inn.clone();
            recalc_counts(&mut inn, 6);
            prop_assert_eq!(inn, once);
        }
    }
}
