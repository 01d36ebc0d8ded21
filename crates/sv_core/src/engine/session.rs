//! Scoring session: the one context object a scorer's table owns.
//!
//! Wraps a [`Match`] and exposes the entry points the UI is allowed to use.
//! Nothing here is shared between sessions; callers serialize access.

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::recompute::recalc_counts;
use super::{scorer, undo};
use crate::config::MatchSetup;
use crate::error::{Result, ScoringError};
use crate::models::{Delivery, EventOpts, Innings, Match, MatchMeta, ScoringEvent};

#[derive(Debug, Clone)]
pub struct ScoringSession {
    id: Uuid,
    state: Match,
}

impl ScoringSession {
    pub fn new(state: Match) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, title = %state.meta.title, "scoring session opened");
        Self { id, state }
    }

    /// Validate a setup document and open a session on the resulting match.
    pub fn from_setup(setup: MatchSetup) -> Result<Self> {
        Ok(Self::new(setup.into_match()?))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn into_state(self) -> Match {
        self.state
    }

    pub fn current(&self) -> &Innings {
        self.state.current()
    }

    // ========================
    // Scoring
    // ========================

    pub fn handle_event(&mut self, event: &ScoringEvent, opts: EventOpts) {
        scorer::handle_event(&mut self.state, event, opts);
    }

    /// Convenience for the pad: parse a wire tag and apply it.
    pub fn handle_tag(&mut self, tag: &str, opts: EventOpts) {
        self.handle_event(&ScoringEvent::from(tag), opts);
    }

    pub fn undo(&mut self) -> Option<Delivery> {
        undo::undo(&mut self.state)
    }

    pub fn end_over(&mut self) -> bool {
        scorer::end_over(&mut self.state)
    }

    pub fn new_over(&mut self) -> bool {
        scorer::new_over(&mut self.state)
    }

    pub fn change_innings(&mut self) {
        scorer::change_innings(&mut self.state);
    }

    // ========================
    // Crease
    // ========================

    pub fn set_batters(&mut self, first: impl Into<String>, second: impl Into<String>) {
        let inn = self.state.current_mut();
        inn.batters = [first.into(), second.into()];
        inn.striker = 0;
    }

    pub fn set_striker(&mut self, slot: u8) {
        self.state.current_mut().striker = slot.min(1);
    }

    /// Put a new batter in `slot`, typically after a wicket.
    pub fn replace_batter(&mut self, slot: u8, name: impl Into<String>) {
        let inn = self.state.current_mut();
        inn.batters[usize::from(slot.min(1))] = name.into();
    }

    pub fn set_bowler(&mut self, name: impl Into<String>) {
        self.state.current_mut().bowler = name.into();
    }

    // ========================
    // Settings
    // ========================

    /// Explicit settings edit. A new over length re-derives the counters of
    /// every innings that has started.
    pub fn update_meta(&mut self, meta: MatchMeta) -> Result<()> {
        meta.validate().map_err(ScoringError::InvalidSetup)?;

        let over_length_changed = meta.balls_per_over != self.state.meta.balls_per_over;
        self.state.meta = meta;

        if over_length_changed {
            let balls_per_over = self.state.meta.balls_per_over;
            for inn in self.state.innings.iter_mut().filter(|inn| inn.has_started()) {
                recalc_counts(inn, balls_per_over);
            }
            warn!(
                session = %self.id,
                balls_per_over,
                "over length changed, counters recomputed"
            );
        }
        Ok(())
    }

    /// Throw away both innings and start again with the same sides.
    pub fn reset(&mut self) {
        self.state.reset_innings();
        info!(session = %self.id, "match reset");
    }
}
