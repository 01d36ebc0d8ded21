//! Figures derived from the timeline: scoreboard header and player cards.
//!
//! Nothing here is stored on the match; everything is recomputed from the
//! log, so it always agrees with what was scored (and un-scored).

pub mod cards;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::models::Match;

pub use cards::{batting_card, bowling_card, BattingLine, BowlingLine};
pub use summary::{balls_remaining, chase_result, run_rate, scoreboard, ChaseResult, Scoreboard};

/// Everything a viewer needs for one innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsReport {
    pub board: Scoreboard,
    pub batting: Vec<BattingLine>,
    pub bowling: Vec<BowlingLine>,
}

pub fn innings_report(m: &Match, innings_index: usize) -> InningsReport {
    let inn = &m.innings[innings_index.min(1)];
    InningsReport {
        board: scoreboard(m, innings_index),
        batting: batting_card(inn),
        bowling: bowling_card(inn),
    }
}

/// Reports for every innings that has started, plus the live one.
pub fn match_report(m: &Match) -> Vec<InningsReport> {
    (0..m.innings.len())
        .filter(|&idx| idx == m.current_index() || m.innings[idx].has_started())
        .map(|idx| innings_report(m, idx))
        .collect()
}
