//! Batting and bowling cards, derived from the timeline.

use serde::{Deserialize, Serialize};

use crate::models::{Delivery, ExtraKind, Innings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingLine {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub out: bool,
}

impl BattingLine {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    pub fn strike_rate(&self) -> f32 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f32 * 100.0 / self.balls as f32
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingLine {
    pub name: String,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    pub wides: u32,
    pub no_balls: u32,
}

impl BowlingLine {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    /// Overs in cricket notation for the given over length.
    pub fn overs_display(&self, balls_per_over: u32) -> String {
        let per_over = balls_per_over.max(1);
        format!("{}.{}", self.balls / per_over, self.balls % per_over)
    }

    /// Runs per over.
    pub fn economy(&self, balls_per_over: u32) -> f32 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f32 * balls_per_over.max(1) as f32 / self.balls as f32
        }
    }
}

/// Batting card in order of first appearance at the crease.
///
/// Deliveries bowled before any batter was named are skipped.
pub fn batting_card(inn: &Innings) -> Vec<BattingLine> {
    let mut card: Vec<BattingLine> = Vec::new();

    for entry in &inn.timeline {
        for name in &entry.batters {
            if !name.is_empty() && !card.iter().any(|line| &line.name == name) {
                card.push(BattingLine::new(name));
            }
        }

        let striker = entry.striker_name();
        let Some(line) = card.iter_mut().find(|line| line.name == striker) else {
            continue;
        };
        if faced_by_striker(entry) {
            line.balls += 1;
        }
        let bat = entry.runs_off_bat();
        line.runs += bat;
        match bat {
            4 => line.fours += 1,
            6 => line.sixes += 1,
            _ => {}
        }
        if entry.wicket {
            line.out = true;
        }
    }
    card
}

/// Wides are not counted as balls faced; no-balls are.
fn faced_by_striker(entry: &Delivery) -> bool {
    entry.legal || entry.extra == Some(ExtraKind::NoBall)
}

/// Bowling card in order of first delivery.
pub fn bowling_card(inn: &Innings) -> Vec<BowlingLine> {
    let mut card: Vec<BowlingLine> = Vec::new();

    for entry in inn.timeline.iter().filter(|entry| !entry.bowler.is_empty()) {
        let idx = match card.iter().position(|line| line.name == entry.bowler) {
            Some(idx) => idx,
            None => {
                card.push(BowlingLine::new(&entry.bowler));
                card.len() - 1
            }
        };
        let line = &mut card[idx];

        if entry.legal {
            line.balls += 1;
        }
        line.runs += entry.runs_conceded();
        if entry.wicket {
            line.wickets += 1;
        }
        match entry.extra {
            Some(ExtraKind::Wide) => line.wides += 1,
            Some(ExtraKind::NoBall) => line.no_balls += 1,
            _ => {}
        }
    }
    card
}
