use serde::{Deserialize, Serialize};

use crate::models::{Innings, Match, MatchMeta, ALL_OUT_WICKETS};

/// Outcome once the chase is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChaseResult {
    /// Batting side reached the target with wickets in hand
    WonByWickets { wickets: u32 },
    /// Bowling side defended; margin in runs
    WonByRuns { runs: u32 },
    Tie,
}

/// What the scoreboard header shows for one innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub batting_team: String,
    pub score: String,
    pub overs: String,
    pub run_rate: f32,
    pub extras: u32,
    pub free_hit: bool,
    pub over_balls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_needed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balls_remaining: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_rate: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ChaseResult>,
}

/// Runs per over so far.
pub fn run_rate(inn: &Innings, balls_per_over: u32) -> f32 {
    if inn.balls == 0 {
        0.0
    } else {
        inn.runs as f32 * balls_per_over.max(1) as f32 / inn.balls as f32
    }
}

/// Legal balls left in the innings' allocation.
pub fn balls_remaining(inn: &Innings, meta: &MatchMeta) -> u32 {
    let allocation = meta.overs_per_side.saturating_mul(meta.balls_per_over);
    let bowled = inn.overs.saturating_mul(meta.balls_per_over).saturating_add(inn.legal_balls);
    allocation.saturating_sub(bowled)
}

/// Decide the chase, if it is over.
pub fn chase_result(inn: &Innings, meta: &MatchMeta) -> Option<ChaseResult> {
    let target = inn.target?;
    if inn.runs >= target {
        return Some(ChaseResult::WonByWickets {
            wickets: ALL_OUT_WICKETS.saturating_sub(inn.wickets),
        });
    }
    if !inn.is_complete(meta) {
        return None;
    }
    // target is first innings + 1, so one short is a tie
    let shortfall = target - inn.runs;
    if shortfall == 1 {
        Some(ChaseResult::Tie)
    } else {
        Some(ChaseResult::WonByRuns { runs: shortfall - 1 })
    }
}

pub fn scoreboard(m: &Match, innings_index: usize) -> Scoreboard {
    let inn = &m.innings[innings_index.min(1)];
    let meta = &m.meta;
    let chasing = inn.target.is_some();

    let runs_needed = inn.target.map(|target| target.saturating_sub(inn.runs));
    let remaining = chasing.then(|| balls_remaining(inn, meta));
    let required_rate = match (runs_needed, remaining) {
        (Some(needed), Some(balls)) if balls > 0 && needed > 0 => {
            Some(needed as f32 * meta.balls_per_over.max(1) as f32 / balls as f32)
        }
        _ => None,
    };

    Scoreboard {
        batting_team: m.teams[usize::from(inn.batting.min(1))].name.clone(),
        score: inn.score_display(),
        overs: inn.overs_display(),
        run_rate: run_rate(inn, meta.balls_per_over),
        extras: inn.extras.total(),
        free_hit: inn.free_hit,
        over_balls: inn.over_balls.clone(),
        target: inn.target,
        runs_needed,
        balls_remaining: remaining,
        required_rate,
        result: chase_result(inn, meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{change_innings, handle_event_at};
    use crate::models::{EventOpts, ScoringEvent, Team};

    fn short_match() -> Match {
        let meta = MatchMeta { overs_per_side: 2, ..MatchMeta::default() };
        Match::new(meta, [Team::new("Lions"), Team::new("Tigers")])
    }

    fn play(m: &mut Match, tags: &[&str]) {
        for tag in tags {
            handle_event_at(m, &ScoringEvent::from(*tag), EventOpts::default(), 0);
        }
    }

    #[test]
    fn test_first_innings_board() {
        let mut m = short_match();
        play(&mut m, &["4", "wide", "2", "dot"]);
        let board = scoreboard(&m, 0);
        assert_eq!(board.batting_team, "Lions");
        assert_eq!(board.score, "7/0");
        assert_eq!(board.overs, "0.3");
        assert_eq!(board.run_rate, 14.0);
        assert_eq!(board.extras, 1);
        assert!(board.target.is_none());
        assert!(board.result.is_none());
    }

    #[test]
    fn test_chase_in_progress() {
        let mut m = short_match();
        play(&mut m, &["6", "6"]);
        change_innings(&mut m);
        play(&mut m, &["4", "dot", "dot"]);

        let board = scoreboard(&m, 1);
        assert_eq!(board.batting_team, "Tigers");
        assert_eq!(board.target, Some(13));
        assert_eq!(board.runs_needed, Some(9));
        assert_eq!(board.balls_remaining, Some(9));
        assert_eq!(board.required_rate, Some(6.0));
        assert!(board.result.is_none());
    }

    #[test]
    fn test_balls_remaining_saturates_on_huge_allocation() {
        let mut m = short_match();
        play(&mut m, &["6"]);
        change_innings(&mut m);
        play(&mut m, &["dot"]);
        m.meta.overs_per_side = u32::MAX;

        assert_eq!(balls_remaining(m.current(), &m.meta), u32::MAX - 1);
        let board = scoreboard(&m, 1);
        assert_eq!(board.balls_remaining, Some(u32::MAX - 1));
    }

    #[test]
    fn test_chase_results() {
        let mut m = short_match();
        play(&mut m, &["6"]);
        change_innings(&mut m);
        play(&mut m, &["wicket", "6", "1"]);
        assert_eq!(
            scoreboard(&m, 1).result,
            Some(ChaseResult::WonByWickets { wickets: 9 })
        );

        let mut tie = short_match();
        play(&mut tie, &["4"]);
        change_innings(&mut tie);
        play(&mut tie, &["4"]);
        play(&mut tie, &["dot"; 11]);
        assert_eq!(scoreboard(&tie, 1).result, Some(ChaseResult::Tie));

        let mut defended = short_match();
        play(&mut defended, &["6", "4"]);
        change_innings(&mut defended);
        play(&mut defended, &["dot"; 12]);
        assert_eq!(
            scoreboard(&defended, 1).result,
            Some(ChaseResult::WonByRuns { runs: 10 })
        );
    }
}
