//! # sv_core - Ball-by-ball Cricket Scoring Engine
//!
//! This library holds the state machine behind a live scoring pad: one
//! delivery at a time, with extras, free hits, strike rotation, overs,
//! innings changes and undo.
//!
//! ## Features
//! - Deterministic scoring (same event log = same scoreboard)
//! - Undo that re-derives ball and over counts from the log
//! - Lossless JSON snapshots, unknown fields preserved
//! - Compact MessagePack + LZ4 saves with checksums
//! - JSON API for easy integration with web and mobile front ends

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod stats;

// Re-export main API functions
pub use api::{apply_action, apply_action_json, scoreboard_json, ScoringAction};
pub use config::{MatchSetup, TeamSetup};
pub use error::{Result, ScoringError};

// Re-export scoring engine
pub use engine::{
    change_innings, end_over, handle_event, new_over, rebuild_over_strip, recalc_counts, symbol,
    undo, ScoringSession,
};

// Re-export match models
pub use models::{
    Delivery, EventOpts, ExtraKind, Extras, Innings, Match, MatchMeta, ScoringEvent, Team,
    TossChoice,
};

// Re-export save system
pub use save::{SaveError, SaveFile, SaveManager};

// Re-export derived figures
pub use stats::{match_report, InningsReport, Scoreboard};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
