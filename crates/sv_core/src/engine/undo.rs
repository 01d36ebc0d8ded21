use tracing::debug;

use super::recompute::recalc_counts;
use crate::models::{Delivery, ExtraKind, Match};

/// Take back the most recent delivery of the current innings.
///
/// Runs, wickets and extras are subtracted from the popped entry; ball and
/// over counters are rebuilt from the shortened timeline when the entry was
/// legal. Undoing a no-ball clears the free hit instead of restoring the
/// earlier flag, and a wicket voided by a free hit stays voided. The crease
/// (striker, batters, bowler) goes back to the entry's snapshot.
///
/// Returns the removed entry, or `None` when the timeline was empty.
pub fn undo(m: &mut Match) -> Option<Delivery> {
    let balls_per_over = m.meta.balls_per_over;
    let inn = m.current_mut();
    let entry = inn.timeline.pop()?;

    inn.runs = inn.runs.saturating_sub(entry.runs);
    if entry.wicket {
        inn.wickets = inn.wickets.saturating_sub(1);
    }
    if let Some(kind) = entry.extra {
        let bucket = inn.extras.bucket_mut(kind);
        *bucket = bucket.saturating_sub(1);
        if kind == ExtraKind::NoBall {
            inn.free_hit = false;
        }
    }

    inn.over_balls.pop();
    if entry.legal {
        recalc_counts(inn, balls_per_over);
    }

    inn.striker = entry.striker.min(1);
    inn.batters = entry.batters.clone();
    inn.bowler = entry.bowler.clone();

    debug!(ev = %entry.ev, score = %inn.score_display(), "delivery undone");
    Some(entry)
}
