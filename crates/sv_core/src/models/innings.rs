use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::delivery::{Delivery, ExtraKind};
use super::match_state::MatchMeta;

/// Wickets that end an innings.
pub const ALL_OUT_WICKETS: u32 = 10;

/// Extras tally. For no-balls only the penalty run is counted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Extras {
    #[serde(default)]
    pub wd: u32,
    #[serde(default)]
    pub nb: u32,
    #[serde(default)]
    pub b: u32,
    #[serde(default)]
    pub lb: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wd + self.nb + self.b + self.lb
    }

    pub fn bucket_mut(&mut self, kind: ExtraKind) -> &mut u32 {
        match kind {
            ExtraKind::Wide => &mut self.wd,
            ExtraKind::NoBall => &mut self.nb,
            ExtraKind::Bye => &mut self.b,
            ExtraKind::LegBye => &mut self.lb,
        }
    }
}

/// One side's batting effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    /// Team index of the batting side
    pub batting: u8,
    /// Team index of the bowling side
    pub bowling: u8,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    /// Legal deliveries bowled in the whole innings
    #[serde(default)]
    pub balls: u32,
    /// Legal deliveries bowled in the current over
    #[serde(default)]
    pub legal_balls: u32,
    #[serde(default)]
    pub overs: u32,
    /// Display symbols of the current over
    #[serde(default)]
    pub over_balls: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<Delivery>,
    #[serde(default)]
    pub extras: Extras,
    #[serde(default)]
    pub target: Option<u32>,
    #[serde(default)]
    pub batters: [String; 2],
    #[serde(default)]
    pub striker: u8,
    #[serde(default)]
    pub bowler: String,
    #[serde(default)]
    pub free_hit: bool,
    /// Fields written by other collaborators (batStats, bowlStats, ...)
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl Innings {
    pub fn new(batting: u8, bowling: u8) -> Self {
        Self {
            batting,
            bowling,
            runs: 0,
            wickets: 0,
            balls: 0,
            legal_balls: 0,
            overs: 0,
            over_balls: Vec::new(),
            timeline: Vec::new(),
            extras: Extras::default(),
            target: None,
            batters: Default::default(),
            striker: 0,
            bowler: String::new(),
            free_hit: false,
            other: BTreeMap::new(),
        }
    }

    pub fn swap_strike(&mut self) {
        self.striker = 1 - self.striker.min(1);
    }

    pub fn striker_name(&self) -> &str {
        &self.batters[usize::from(self.striker.min(1))]
    }

    pub fn non_striker_name(&self) -> &str {
        &self.batters[usize::from(1 - self.striker.min(1))]
    }

    /// Overs in cricket notation, e.g. `12.3`.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.overs, self.legal_balls)
    }

    pub fn score_display(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }

    pub fn has_started(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Whether the scorer should stop accepting deliveries.
    ///
    /// The engine never enforces this; it is a hint for the caller.
    pub fn is_complete(&self, meta: &MatchMeta) -> bool {
        if self.wickets >= ALL_OUT_WICKETS {
            return true;
        }
        if meta.overs_per_side > 0 && self.overs >= meta.overs_per_side {
            return true;
        }
        matches!(self.target, Some(target) if self.runs >= target)
    }
}
