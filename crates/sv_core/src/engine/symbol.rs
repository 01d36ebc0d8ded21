//! Short display codes for the over strip and the ball log.

use crate::models::{Delivery, ExtraKind};

pub const WICKET_SYMBOL: &str = "W";

/// Display code for a timeline entry: `wd`, `nb`/`nb+N`, `b`, `lb`, `W` or the run value.
///
/// `overBalls` stores these strings, so the live path and the recompute
/// functions must both go through here.
pub fn symbol(entry: &Delivery) -> String {
    match entry.extra {
        Some(ExtraKind::NoBall) => match entry.bat_runs {
            Some(bat) if bat > 0 => format!("nb+{bat}"),
            _ => ExtraKind::NoBall.code().to_string(),
        },
        Some(kind) => kind.code().to_string(),
        None if entry.wicket => WICKET_SYMBOL.to_string(),
        None => entry.runs.to_string(),
    }
}
