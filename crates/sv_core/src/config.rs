//! Match setup documents.
//!
//! A scorer fills in a `MatchSetup` before the first ball, either through the
//! UI (JSON) or as a hand-written YAML file for the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::error::{Result, ScoringError};
use crate::models::{
    Match, MatchMeta, Team, TossChoice, DEFAULT_BALLS_PER_OVER, DEFAULT_OVERS_PER_SIDE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchSetup {
    #[serde(default)]
    #[validate(length(max = 120))]
    pub title: String,
    #[serde(default = "default_overs")]
    #[validate(range(min = 1, max = 100))]
    pub overs_per_side: u32,
    #[serde(default = "default_balls_per_over")]
    #[validate(range(min = 1, max = 12))]
    pub balls_per_over: u32,
    pub teams: [TeamSetup; 2],
    #[serde(default)]
    pub toss: Option<u8>,
    #[serde(default)]
    pub opted: Option<TossChoice>,
    /// Opening pair, striker first
    #[serde(default)]
    pub openers: Option<[String; 2]>,
    #[serde(default)]
    pub opening_bowler: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamSetup {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
}

fn default_overs() -> u32 {
    DEFAULT_OVERS_PER_SIDE
}

fn default_balls_per_over() -> u32 {
    DEFAULT_BALLS_PER_OVER
}

impl MatchSetup {
    /// Read a setup file; `.yaml`/`.yml` as YAML, `.json` as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let setup: MatchSetup = match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)?,
            "json" => serde_json::from_str(&text)?,
            _ => return Err(ScoringError::UnsupportedFormat { path: path.display().to_string() }),
        };
        debug!(path = %path.display(), title = %setup.title, "match setup loaded");
        Ok(setup)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn meta(&self) -> MatchMeta {
        MatchMeta {
            title: self.title.clone(),
            overs_per_side: self.overs_per_side,
            balls_per_over: self.balls_per_over,
            toss: self.toss,
            opted: self.opted,
        }
    }

    /// Full validation: field rules, then the cross-field checks.
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        for team in &self.teams {
            team.validate()?;
        }
        self.meta().validate()?;

        let [home, away] = &self.teams;
        if home.name.trim().eq_ignore_ascii_case(away.name.trim()) {
            return Err(ScoringError::InvalidTeams(format!(
                "both teams are called '{}'",
                home.name
            )));
        }
        Ok(())
    }

    /// Validate and build the match, with the crease set for the first ball.
    pub fn into_match(self) -> Result<Match> {
        self.check()?;

        let meta = self.meta();
        let [home, away] = self.teams;
        let teams = [
            Team { name: home.name, players: home.players },
            Team { name: away.name, players: away.players },
        ];
        let mut m = Match::new(meta, teams);

        let inn = m.current_mut();
        if let Some(openers) = self.openers {
            inn.batters = openers;
        }
        if let Some(bowler) = self.opening_bowler {
            inn.bowler = bowler;
        }
        Ok(m)
    }
}
