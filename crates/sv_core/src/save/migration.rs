use super::error::SaveError;
use super::format::SaveFile;
use super::SAVE_VERSION;
use crate::engine::recalc_counts;
use crate::models::{Extras, Innings};

/// Migrate save data from older versions to current version
pub fn migrate_save(mut save: SaveFile) -> Result<SaveFile, SaveError> {
    let original_version = save.version;

    save = match save.version {
        0 => migrate_v0_to_v1(save)?,
        1 => save, // Current version, no migration needed
        _ => {
            return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
        }
    };

    save.version = SAVE_VERSION;

    if original_version != SAVE_VERSION {
        save.update_timestamp();
        log::info!("Migrated save from version {} to {}", original_version, SAVE_VERSION);
    }

    Ok(save)
}

/// Version 0 saves only kept the timeline reliably; every counter is
/// re-derived from it.
fn migrate_v0_to_v1(mut save: SaveFile) -> Result<SaveFile, SaveError> {
    log::info!("Migrating save from version 0 to 1");

    let balls_per_over = save.match_data.meta.balls_per_over;
    for inn in save.match_data.innings.iter_mut() {
        rebuild_totals(inn);
        recalc_counts(inn, balls_per_over);
    }

    // v0 did not store the chase target
    let m = &mut save.match_data;
    if m.inn_now == 1 && m.innings[1].target.is_none() {
        let target = m.innings[0].runs + 1;
        log::warn!("Second innings had no target, setting {}", target);
        m.innings[1].target = Some(target);
    }

    Ok(save)
}

fn rebuild_totals(inn: &mut Innings) {
    let mut extras = Extras::default();
    let mut runs = 0;
    let mut wickets = 0;

    for entry in &inn.timeline {
        runs += entry.runs;
        if entry.wicket {
            wickets += 1;
        }
        if let Some(kind) = entry.extra {
            *extras.bucket_mut(kind) += 1;
        }
    }

    inn.runs = runs;
    inn.wickets = wickets;
    inn.extras = extras;
}

/// Check if a save needs migration
pub fn needs_migration(save: &SaveFile) -> bool {
    save.version < SAVE_VERSION
}
