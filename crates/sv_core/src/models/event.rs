use std::fmt;
use std::str::FromStr;

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Action tag coming from the scoring pad.
///
/// Serialized as the bare tag string (`"dot"`, `"1"`, `"noball"`, ...) so
/// timelines written by older scorers stay loadable. Tags outside the
/// vocabulary are kept verbatim in [`ScoringEvent::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(from = "String", into = "String")]
pub enum ScoringEvent {
    Dot,
    One,
    Two,
    Three,
    Four,
    Six,
    Wicket,
    Wide,
    NoBall,
    Bye,
    LegBye,
    Undo,
    Other(String),
}

impl ScoringEvent {
    pub fn tag(&self) -> &str {
        match self {
            ScoringEvent::Dot => "dot",
            ScoringEvent::One => "1",
            ScoringEvent::Two => "2",
            ScoringEvent::Three => "3",
            ScoringEvent::Four => "4",
            ScoringEvent::Six => "6",
            ScoringEvent::Wicket => "wicket",
            ScoringEvent::Wide => "wide",
            ScoringEvent::NoBall => "noball",
            ScoringEvent::Bye => "bye",
            ScoringEvent::LegBye => "legbye",
            ScoringEvent::Undo => "undo",
            ScoringEvent::Other(tag) => tag,
        }
    }

    /// Face value for the plain run buttons.
    pub fn run_value(&self) -> Option<u32> {
        match self {
            ScoringEvent::Dot => Some(0),
            ScoringEvent::One => Some(1),
            ScoringEvent::Two => Some(2),
            ScoringEvent::Three => Some(3),
            ScoringEvent::Four => Some(4),
            ScoringEvent::Six => Some(6),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ScoringEvent::Other(_))
    }
}

impl From<&str> for ScoringEvent {
    fn from(tag: &str) -> Self {
        match tag {
            "dot" => ScoringEvent::Dot,
            "1" => ScoringEvent::One,
            "2" => ScoringEvent::Two,
            "3" => ScoringEvent::Three,
            "4" => ScoringEvent::Four,
            "6" => ScoringEvent::Six,
            "wicket" => ScoringEvent::Wicket,
            "wide" => ScoringEvent::Wide,
            "noball" => ScoringEvent::NoBall,
            "bye" => ScoringEvent::Bye,
            "legbye" => ScoringEvent::LegBye,
            "undo" => ScoringEvent::Undo,
            other => ScoringEvent::Other(other.to_string()),
        }
    }
}

impl From<String> for ScoringEvent {
    fn from(tag: String) -> Self {
        ScoringEvent::from(tag.as_str())
    }
}

impl From<ScoringEvent> for String {
    fn from(event: ScoringEvent) -> Self {
        event.tag().to_string()
    }
}

impl FromStr for ScoringEvent {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ScoringEvent::from(s))
    }
}

impl fmt::Display for ScoringEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl JsonSchema for ScoringEvent {
    fn schema_name() -> String {
        "ScoringEvent".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

/// Modifiers sent alongside an event. Only `noball` reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventOpts {
    #[serde(default)]
    pub bat_runs: Option<u32>,
}

impl EventOpts {
    pub fn bat_runs(runs: u32) -> Self {
        Self { bat_runs: Some(runs) }
    }
}
