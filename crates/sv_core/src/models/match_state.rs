use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::innings::Innings;

pub const DEFAULT_OVERS_PER_SIDE: u32 = 20;
pub const DEFAULT_BALLS_PER_OVER: u32 = 6;

/// What the toss winner chose to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TossChoice {
    Bat,
    Bowl,
}

/// Match configuration. Changed only through an explicit settings edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_toss"))]
pub struct MatchMeta {
    #[serde(default)]
    #[validate(length(max = 120))]
    pub title: String,
    #[validate(range(min = 1, max = 100))]
    pub overs_per_side: u32,
    #[validate(range(min = 1, max = 12))]
    pub balls_per_over: u32,
    /// Index of the team that won the toss
    #[serde(default)]
    pub toss: Option<u8>,
    #[serde(default)]
    pub opted: Option<TossChoice>,
}

fn validate_toss(meta: &MatchMeta) -> Result<(), ValidationError> {
    match meta.toss {
        Some(team) if team > 1 => Err(ValidationError::new("toss_team_index")),
        _ => Ok(()),
    }
}

impl Default for MatchMeta {
    fn default() -> Self {
        Self {
            title: String::new(),
            overs_per_side: DEFAULT_OVERS_PER_SIDE,
            balls_per_over: DEFAULT_BALLS_PER_OVER,
            toss: None,
            opted: None,
        }
    }
}

impl MatchMeta {
    /// Team index that bats first according to the toss (team 0 if unknown).
    pub fn first_batting(&self) -> u8 {
        match (self.toss, self.opted) {
            (Some(winner), Some(TossChoice::Bat)) => winner.min(1),
            (Some(winner), Some(TossChoice::Bowl)) => 1 - winner.min(1),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), players: Vec::new() }
    }
}

/// Top-level scoring aggregate: configuration, both sides and both innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub meta: MatchMeta,
    pub teams: [Team; 2],
    pub innings: [Innings; 2],
    /// Innings currently receiving deliveries (0 or 1)
    #[serde(default)]
    pub inn_now: u8,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl Match {
    pub fn new(meta: MatchMeta, teams: [Team; 2]) -> Self {
        let batting = meta.first_batting();
        Self {
            innings: fresh_innings(batting),
            meta,
            teams,
            inn_now: 0,
            other: BTreeMap::new(),
        }
    }

    pub fn current_index(&self) -> usize {
        usize::from(self.inn_now.min(1))
    }

    pub fn current(&self) -> &Innings {
        &self.innings[self.current_index()]
    }

    pub fn current_mut(&mut self) -> &mut Innings {
        let idx = self.current_index();
        &mut self.innings[idx]
    }

    pub fn batting_team(&self) -> &Team {
        &self.teams[usize::from(self.current().batting.min(1))]
    }

    pub fn bowling_team(&self) -> &Team {
        &self.teams[usize::from(self.current().bowling.min(1))]
    }

    /// Replace both innings with blank ones, keeping the first innings' sides.
    pub fn reset_innings(&mut self) {
        let batting = self.innings[0].batting.min(1);
        self.innings = fresh_innings(batting);
        self.inn_now = 0;
    }
}

fn fresh_innings(first_batting: u8) -> [Innings; 2] {
    let first_bowling = 1 - first_batting;
    [Innings::new(first_batting, first_bowling), Innings::new(first_bowling, first_batting)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> [Team; 2] {
        [Team::new("Lions"), Team::new("Tigers")]
    }

    #[test]
    fn test_toss_decides_first_batting_side() {
        let meta =
            MatchMeta { toss: Some(1), opted: Some(TossChoice::Bat), ..MatchMeta::default() };
        let m = Match::new(meta, teams());
        assert_eq!(m.innings[0].batting, 1);
        assert_eq!(m.innings[0].bowling, 0);
        assert_eq!(m.innings[1].batting, 0);

        let meta =
            MatchMeta { toss: Some(1), opted: Some(TossChoice::Bowl), ..MatchMeta::default() };
        let m = Match::new(meta, teams());
        assert_eq!(m.innings[0].batting, 0);
        assert_eq!(m.batting_team().name, "Lions");
    }

    #[test]
    fn test_meta_validation() {
        assert!(MatchMeta::default().validate().is_ok());

        let bad = MatchMeta { balls_per_over: 0, ..MatchMeta::default() };
        assert!(bad.validate().is_err());

        let bad_toss = MatchMeta { toss: Some(2), ..MatchMeta::default() };
        assert!(bad_toss.validate().is_err());
    }

    #[test]
    fn test_match_json_keys() {
        let m = Match::new(MatchMeta::default(), teams());
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["meta"]["ballsPerOver"], 6);
        assert_eq!(value["meta"]["oversPerSide"], 20);
        assert_eq!(value["innNow"], 0);
        assert!(value["innings"][1]["target"].is_null());
        assert_eq!(value["teams"][1]["name"], "Tigers");
    }

    #[test]
    fn test_reset_keeps_sides() {
        let meta =
            MatchMeta { toss: Some(1), opted: Some(TossChoice::Bat), ..MatchMeta::default() };
        let mut m = Match::new(meta, teams());
        m.innings[0].runs = 40;
        m.inn_now = 1;

        m.reset_innings();
        assert_eq!(m.inn_now, 0);
        assert_eq!(m.innings[0].runs, 0);
        assert_eq!(m.innings[0].batting, 1);
    }
}
