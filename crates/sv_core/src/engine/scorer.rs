//! Delivery event processor.
//!
//! Every scoring action moves the current innings forward by exactly one
//! delivery (or takes one back, for `undo`). Counters, extras, the over strip
//! and the strike are all updated here; the timeline entry that is appended
//! is what the recompute functions later replay.

use tracing::{debug, info};

use super::symbol::symbol;
use super::undo::undo;
use crate::models::{Delivery, EventOpts, ExtraKind, Innings, Match, ScoringEvent};
use crate::save::format::current_timestamp;

/// Apply one scoring action to the current innings, stamped with the wall clock.
pub fn handle_event(m: &mut Match, event: &ScoringEvent, opts: EventOpts) {
    handle_event_at(m, event, opts, current_timestamp());
}

/// Apply one scoring action with an explicit timestamp (unix ms).
pub fn handle_event_at(m: &mut Match, event: &ScoringEvent, opts: EventOpts, t: u64) {
    let Some(mut entry) = build_entry(event, opts, t) else {
        undo(m);
        return;
    };

    let balls_per_over = m.meta.balls_per_over.max(1);
    let inn = m.current_mut();

    entry.striker = inn.striker;
    entry.bowler = inn.bowler.clone();
    entry.batters = inn.batters.clone();

    // The first legal ball after a no-ball uses up the free hit.
    if entry.legal && inn.free_hit {
        if entry.wicket {
            entry.wicket = false;
            entry.free_hit_wicket_ignored = true;
            debug!(bowler = %entry.bowler, "wicket on free hit ignored");
        }
        inn.free_hit = false;
    }
    if entry.is_no_ball() {
        inn.free_hit = true;
    }

    inn.runs += entry.runs;
    if entry.wicket {
        inn.wickets += 1;
    }
    if let Some(kind) = entry.extra {
        *inn.extras.bucket_mut(kind) += 1;
    }

    let rotate = rotates_strike(&entry);
    let legal = entry.legal;

    debug!(
        ev = %entry.ev,
        runs = entry.runs,
        legal,
        wicket = entry.wicket,
        score = %inn.score_display(),
        "delivery recorded"
    );

    inn.over_balls.push(symbol(&entry));
    inn.timeline.push(entry);

    if rotate {
        inn.swap_strike();
    }

    if legal {
        inn.balls += 1;
        inn.legal_balls += 1;
        if inn.legal_balls % balls_per_over == 0 {
            close_over(inn);
        }
    }
}

/// Timeline entry for `event`, or `None` for `undo`.
fn build_entry(event: &ScoringEvent, opts: EventOpts, t: u64) -> Option<Delivery> {
    let mut entry = Delivery::new(t, event.clone());
    match event {
        ScoringEvent::Undo => return None,
        ScoringEvent::Dot
        | ScoringEvent::One
        | ScoringEvent::Two
        | ScoringEvent::Three
        | ScoringEvent::Four
        | ScoringEvent::Six => entry.runs = event.run_value().unwrap_or_default(),
        ScoringEvent::Wicket => entry.wicket = true,
        ScoringEvent::Wide => {
            entry.runs = 1;
            entry.extra = Some(ExtraKind::Wide);
            entry.legal = false;
        }
        ScoringEvent::NoBall => {
            let bat_runs = opts.bat_runs.unwrap_or(0);
            entry.runs = 1 + bat_runs;
            entry.extra = Some(ExtraKind::NoBall);
            entry.legal = false;
            entry.bat_runs = Some(bat_runs);
        }
        ScoringEvent::Bye => {
            entry.runs = 1;
            entry.extra = Some(ExtraKind::Bye);
        }
        ScoringEvent::LegBye => {
            entry.runs = 1;
            entry.extra = Some(ExtraKind::LegBye);
        }
        ScoringEvent::Other(tag) => {
            // Kept in the log with no effect on any counter.
            debug!(tag = %tag, "unknown scoring tag");
            entry.legal = false;
        }
    }
    Some(entry)
}

/// Run-parity strike rotation for a single delivery.
///
/// Only untagged legal balls use the generic odd-runs rule; byes and leg-byes
/// carry an extra tag and never rotate. No-balls rotate on odd bat runs.
fn rotates_strike(entry: &Delivery) -> bool {
    match entry.extra {
        None => entry.legal && entry.runs % 2 == 1,
        Some(ExtraKind::NoBall) => entry.bat_runs.unwrap_or(0) % 2 == 1,
        Some(_) => false,
    }
}

fn close_over(inn: &mut Innings) {
    inn.overs += 1;
    inn.over_balls.clear();
    inn.legal_balls = 0;
    inn.swap_strike();
    info!(overs = inn.overs, score = %inn.score_display(), "over completed");
}

/// Force-close the current over. Returns `false` (and does nothing) when no
/// ball has been bowled in it yet.
///
/// The closure is not written to the timeline, so a later `recalc_counts`
/// (legal-ball undo, over length edit) drops overs closed this way.
pub fn end_over(m: &mut Match) -> bool {
    let inn = m.current_mut();
    if inn.over_balls.is_empty() {
        return false;
    }
    close_over(inn);
    true
}

/// Alias of [`end_over`] used by the "new over" button.
pub fn new_over(m: &mut Match) -> bool {
    end_over(m)
}

/// Switch the innings receiving deliveries.
///
/// Moving into the second innings sets its target and flips the sides.
/// Moving back re-opens the first innings untouched.
pub fn change_innings(m: &mut Match) {
    if m.inn_now == 0 {
        let first = &m.innings[0];
        let target = first.runs + 1;
        let (batting, bowling) = (first.bowling, first.batting);

        let second = &mut m.innings[1];
        second.target = Some(target);
        second.batting = batting;
        second.bowling = bowling;
        m.inn_now = 1;
        info!(chase_target = target, "second innings started");
    } else {
        m.inn_now = 0;
        info!("first innings re-opened");
    }
}
