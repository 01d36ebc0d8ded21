use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{change_innings, end_over, handle_event, undo};
use crate::models::{EventOpts, Match, ScoringEvent};
use crate::save::{from_json, SaveFile, SAVE_VERSION};
use crate::stats::{match_report, InningsReport};

/// One scorer action as the UI posts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScoringAction {
    Delivery {
        event: ScoringEvent,
        #[serde(default, rename = "batRuns", skip_serializing_if = "Option::is_none")]
        bat_runs: Option<u32>,
    },
    EndOver,
    ChangeInnings,
    Undo,
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "match")]
    pub match_data: Match,
    pub action: ScoringAction,
}

#[derive(Debug, Serialize)]
pub struct ScoreboardResponse {
    pub title: String,
    #[serde(rename = "innNow")]
    pub inn_now: u8,
    pub innings: Vec<InningsReport>,
}

/// Apply a scoring action to the match state.
pub fn apply_action(m: &mut Match, action: &ScoringAction) {
    match action {
        ScoringAction::Delivery { event, bat_runs } => {
            handle_event(m, event, EventOpts { bat_runs: *bat_runs });
        }
        ScoringAction::EndOver => {
            if !end_over(m) {
                debug!("end over ignored, over already empty");
            }
        }
        ScoringAction::ChangeInnings => change_innings(m),
        ScoringAction::Undo => {
            if undo(m).is_none() {
                debug!("undo ignored, timeline empty");
            }
        }
    }
}

/// Main entry point for JSON API - applies one action and returns the updated match
pub fn apply_action_json(request_json: &str) -> Result<String, String> {
    let request: ActionRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let ActionRequest { match_data, action } = request;

    // Same structural checks as a loaded save
    let checked = SaveFile { version: SAVE_VERSION, timestamp: 0, match_data };
    checked.validate().map_err(|e| format!("Invalid match state: {}", e))?;
    let mut m = checked.match_data;

    debug!(?action, innings = m.inn_now, "applying action");
    apply_action(&mut m, &action);

    serde_json::to_string(&m).map_err(|e| format!("Failed to serialize match: {}", e))
}

/// Scoreboard and cards for every started innings of a match snapshot.
pub fn scoreboard_json(match_json: &str) -> Result<String, String> {
    let m = from_json(match_json).map_err(|e| format!("Invalid match snapshot: {}", e))?;

    let response = ScoreboardResponse {
        title: m.meta.title.clone(),
        inn_now: m.inn_now,
        innings: match_report(&m),
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize scoreboard: {}", e))
}
