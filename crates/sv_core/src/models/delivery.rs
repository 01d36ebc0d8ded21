use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::ScoringEvent;

/// Extras bucket a delivery is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ExtraKind {
    #[serde(rename = "wd")]
    Wide,
    #[serde(rename = "nb")]
    NoBall,
    #[serde(rename = "b")]
    Bye,
    #[serde(rename = "lb")]
    LegBye,
}

impl ExtraKind {
    pub fn code(self) -> &'static str {
        match self {
            ExtraKind::Wide => "wd",
            ExtraKind::NoBall => "nb",
            ExtraKind::Bye => "b",
            ExtraKind::LegBye => "lb",
        }
    }

    /// Byes and leg-byes are not charged to the bowler.
    pub fn charged_to_bowler(self) -> bool {
        matches!(self, ExtraKind::Wide | ExtraKind::NoBall)
    }
}

/// One timeline entry. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Unix milliseconds
    pub t: u64,
    pub ev: ScoringEvent,
    /// Everything this ball added to the total, penalty runs included
    pub runs: u32,
    #[serde(default)]
    pub extra: Option<ExtraKind>,
    pub legal: bool,
    #[serde(default)]
    pub wicket: bool,
    /// Index into `batters` of the batter on strike when the ball was bowled
    #[serde(default)]
    pub striker: u8,
    #[serde(default)]
    pub bowler: String,
    #[serde(default)]
    pub batters: [String; 2],
    /// Runs off the bat on a no-ball
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bat_runs: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub free_hit_wicket_ignored: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Delivery {
    /// Blank legal entry for `ev`; the processor fills in the rest.
    pub fn new(t: u64, ev: ScoringEvent) -> Self {
        Self {
            t,
            ev,
            runs: 0,
            extra: None,
            legal: true,
            wicket: false,
            striker: 0,
            bowler: String::new(),
            batters: Default::default(),
            bat_runs: None,
            free_hit_wicket_ignored: false,
        }
    }

    pub fn is_no_ball(&self) -> bool {
        self.extra == Some(ExtraKind::NoBall)
    }

    /// Name of the batter who faced this ball.
    pub fn striker_name(&self) -> &str {
        &self.batters[usize::from(self.striker.min(1))]
    }

    /// Runs credited to the striker's own tally.
    pub fn runs_off_bat(&self) -> u32 {
        match self.extra {
            None => self.runs,
            Some(ExtraKind::NoBall) => self.bat_runs.unwrap_or(0),
            Some(_) => 0,
        }
    }

    /// Runs charged against the bowler's figures.
    pub fn runs_conceded(&self) -> u32 {
        match self.extra {
            Some(kind) if !kind.charged_to_bowler() => 0,
            _ => self.runs,
        }
    }
}
