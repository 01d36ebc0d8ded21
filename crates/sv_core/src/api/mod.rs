pub mod json_api;

pub use json_api::{
    apply_action, apply_action_json, scoreboard_json, ActionRequest, ScoreboardResponse,
    ScoringAction,
};
