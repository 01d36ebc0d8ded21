//! StumpVision CLI Library
//!
//! Match snapshot files, pad-style action parsing and plain-text scoreboards
//! for the `stumpvision` binary.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use sv_core::api::{apply_action, ScoringAction};
use sv_core::save::{from_json, to_json_pretty, SaveFile, SaveManager};
use sv_core::stats::{match_report, InningsReport};
use sv_core::{Match, MatchSetup, ScoringEvent};

/// Parse one command-line action.
///
/// Accepts the pad's event tags (`4`, `dot`, `wide`, ...), `noball+N` for a
/// no-ball with runs off the bat, and `undo`, `end-over`, `change-innings`.
pub fn parse_action(raw: &str) -> Result<ScoringAction> {
    let raw = raw.trim();
    let action = match raw {
        "" => bail!("empty action"),
        "undo" => ScoringAction::Undo,
        "end-over" => ScoringAction::EndOver,
        "change-innings" => ScoringAction::ChangeInnings,
        _ => match raw.split_once('+') {
            Some((tag, runs)) => {
                let event = ScoringEvent::from(tag);
                if event != ScoringEvent::NoBall {
                    bail!("only no-balls take bat runs, got '{raw}'");
                }
                let bat_runs: u32 = runs
                    .parse()
                    .with_context(|| format!("Invalid bat runs in '{raw}'"))?;
                ScoringAction::Delivery { event, bat_runs: Some(bat_runs) }
            }
            None => {
                let event = ScoringEvent::from(raw);
                if !event.is_known() {
                    bail!("unknown event '{raw}'");
                }
                ScoringAction::Delivery { event, bat_runs: None }
            }
        },
    };
    Ok(action)
}

pub fn read_match(path: &Path) -> Result<Match> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file: {}", path.display()))?;
    from_json(&json).with_context(|| format!("Invalid match file: {}", path.display()))
}

pub fn write_match(path: &Path, m: &Match) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json = to_json_pretty(m).context("Failed to serialize match")?;
    fs::write(path, json).with_context(|| format!("Failed to write match file: {}", path.display()))
}

/// Build a fresh match from a setup file and write its snapshot.
pub fn new_match(setup_path: &Path, out: &Path) -> Result<Match> {
    let setup = MatchSetup::load(setup_path)
        .with_context(|| format!("Failed to load setup: {}", setup_path.display()))?;
    let m = setup.into_match().context("Match setup rejected")?;
    write_match(out, &m)?;
    Ok(m)
}

/// Apply every action in order and rewrite the snapshot in place.
pub fn score(match_path: &Path, actions: &[String]) -> Result<Match> {
    // parse all first so a typo leaves the file untouched
    let parsed = actions.iter().map(|raw| parse_action(raw)).collect::<Result<Vec<_>>>()?;

    let mut m = read_match(match_path)?;
    for action in &parsed {
        apply_action(&mut m, action);
    }
    write_match(match_path, &m)?;
    info!(path = %match_path.display(), actions = parsed.len(), "actions applied");
    Ok(m)
}

/// Convert a JSON snapshot into a compressed save file.
pub fn pack(input: &Path, out: &Path) -> Result<u64> {
    let m = read_match(input)?;
    SaveManager::save_to_path(out, &SaveFile::new(m))
        .with_context(|| format!("Failed to write save: {}", out.display()))?;
    let size = fs::metadata(out)?.len();
    info!(path = %out.display(), bytes = size, "save packed");
    Ok(size)
}

/// Convert a compressed save file back into a JSON snapshot.
pub fn unpack(input: &Path, out: &Path) -> Result<Match> {
    let save = SaveManager::load_from_path(input)
        .with_context(|| format!("Failed to load save: {}", input.display()))?;
    write_match(out, &save.match_data)?;
    Ok(save.match_data)
}

pub fn render_report(m: &Match) -> String {
    let mut out = String::new();
    if !m.meta.title.is_empty() {
        out.push_str(&format!("{}\n", m.meta.title));
    }
    for report in match_report(m) {
        out.push('\n');
        render_innings(&mut out, &report, m.meta.balls_per_over);
    }
    out
}

fn render_innings(out: &mut String, report: &InningsReport, balls_per_over: u32) {
    let board = &report.board;
    out.push_str(&format!(
        "{} {} ({} ov)  RR {:.2}  Extras {}\n",
        board.batting_team, board.score, board.overs, board.run_rate, board.extras
    ));
    if let Some(target) = board.target {
        out.push_str(&format!("Target {target}"));
        if let (Some(need), Some(balls)) = (board.runs_needed, board.balls_remaining) {
            out.push_str(&format!(", need {need} from {balls}"));
        }
        out.push('\n');
    }
    if let Some(result) = &board.result {
        out.push_str(&format!("Result: {result:?}\n"));
    }
    if board.free_hit {
        out.push_str("FREE HIT\n");
    }
    out.push_str(&format!("This over: {}\n", board.over_balls.join(" ")));

    for line in &report.batting {
        let marker = if line.out { "" } else { "*" };
        out.push_str(&format!(
            "  {:<20} {:>3}{:<1} ({}) 4s {} 6s {} SR {:.1}\n",
            line.name,
            line.runs,
            marker,
            line.balls,
            line.fours,
            line.sixes,
            line.strike_rate()
        ));
    }
    for line in &report.bowling {
        out.push_str(&format!(
            "  {:<20} {}-{} ({} ov) wd {} nb {} Econ {:.2}\n",
            line.name,
            line.wickets,
            line.runs,
            line.overs_display(balls_per_over),
            line.wides,
            line.no_balls,
            line.economy(balls_per_over)
        ));
    }
}
