pub mod recompute;
pub mod scorer;
pub mod session;
pub mod symbol;
pub mod undo;

#[cfg(test)]
mod scoring_contracts_test;

pub use recompute::{rebuild_over_strip, recalc_counts};
pub use scorer::{change_innings, end_over, handle_event, handle_event_at, new_over};
pub use session::ScoringSession;
pub use symbol::symbol;
pub use undo::undo;
