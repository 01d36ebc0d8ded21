//! Derive ball and over counters from the timeline.

use super::symbol::symbol;
use crate::models::Innings;

/// Rebuild `balls`, `overs`, `legalBalls`, `overBalls` and `freeHit` by
/// replaying the whole timeline.
///
/// Runs, wickets and extras are left alone. Overs closed by hand with
/// `end_over` are not in the log and are not reproduced.
pub fn recalc_counts(inn: &mut Innings, balls_per_over: u32) {
    let balls_per_over = balls_per_over.max(1);

    inn.balls = 0;
    inn.overs = 0;
    inn.over_balls.clear();

    let mut lb = 0;
    let mut free_hit_pending = false;

    for entry in &inn.timeline {
        if entry.is_no_ball() {
            free_hit_pending = true;
        }
        if entry.legal {
            inn.balls += 1;
            free_hit_pending = false;
            lb += 1;
            if lb == balls_per_over {
                inn.overs += 1;
                lb = 0;
                inn.over_balls.clear();
            } else {
                inn.over_balls.push(symbol(entry));
            }
        } else {
            inn.over_balls.push(symbol(entry));
        }
    }

    inn.legal_balls = lb;
    inn.free_hit = free_hit_pending;
}

/// Resynchronize only the over strip and `legalBalls` from the tail of the
/// timeline (the last `balls_per_over` entries).
///
/// The window is aligned to over boundaries using the legal balls that come
/// before it. Illegal deliveries of the current over that fall outside the
/// window are not shown.
pub fn rebuild_over_strip(inn: &mut Innings, balls_per_over: u32) {
    let balls_per_over = balls_per_over.max(1);
    let start = inn.timeline.len().saturating_sub(balls_per_over as usize);
    let (before, window) = inn.timeline.split_at(start);

    let mut lb = before.iter().filter(|entry| entry.legal).count() as u32 % balls_per_over;
    let mut strip = Vec::with_capacity(window.len());

    for entry in window {
        if entry.legal {
            lb += 1;
            if lb == balls_per_over {
                lb = 0;
                strip.clear();
                continue;
            }
        }
        strip.push(symbol(entry));
    }

    inn.over_balls = strip;
    inn.legal_balls = lb;
}
