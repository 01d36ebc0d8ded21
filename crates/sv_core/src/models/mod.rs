pub mod delivery;
pub mod event;
pub mod innings;
pub mod match_state;

pub use delivery::{Delivery, ExtraKind};
pub use event::{EventOpts, ScoringEvent};
pub use innings::{Extras, Innings, ALL_OUT_WICKETS};
pub use match_state::{
    Match, MatchMeta, Team, TossChoice, DEFAULT_BALLS_PER_OVER, DEFAULT_OVERS_PER_SIDE,
};
