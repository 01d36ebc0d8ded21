//! StumpVision CLI
//!
//! Score a match from the terminal against a JSON snapshot file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stumpvision")]
#[command(about = "Ball-by-ball cricket scoring on match snapshot files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a match snapshot from a setup file
    New {
        /// Setup file (.yaml, .yml or .json)
        #[arg(long)]
        setup: PathBuf,

        /// Output match JSON path
        #[arg(long)]
        out: PathBuf,
    },

    /// Apply scoring actions to a match snapshot
    Score {
        /// Match JSON path, rewritten in place
        #[arg(long = "match")]
        match_path: PathBuf,

        /// Event tags (4, dot, wide, ...), noball+N, undo, end-over, change-innings
        #[arg(required = true)]
        actions: Vec<String>,
    },

    /// Print scoreboard and cards
    Show {
        /// Match JSON path
        #[arg(long = "match")]
        match_path: PathBuf,
    },

    /// Compress a match snapshot into a save file
    Pack {
        /// Input match JSON path
        #[arg(long)]
        r#in: PathBuf,

        /// Output save path
        #[arg(long)]
        out: PathBuf,
    },

    /// Restore a match snapshot from a save file
    Unpack {
        /// Input save path
        #[arg(long)]
        r#in: PathBuf,

        /// Output match JSON path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New { setup, out } => {
            let m = sv_cli::new_match(&setup, &out)?;
            println!("Match created: {}", out.display());
            println!("   {} v {}", m.teams[0].name, m.teams[1].name);
            println!("   {} overs, {} balls per over", m.meta.overs_per_side, m.meta.balls_per_over);
            println!("   {} bat first", m.batting_team().name);
        }

        Commands::Score { match_path, actions } => {
            let m = sv_cli::score(&match_path, &actions)?;
            let inn = m.current();
            println!(
                "{} {} ({} ov)  this over: {}",
                m.batting_team().name,
                inn.score_display(),
                inn.overs_display(),
                inn.over_balls.join(" ")
            );
        }

        Commands::Show { match_path } => {
            let m = sv_cli::read_match(&match_path)?;
            print!("{}", sv_cli::render_report(&m));
        }

        Commands::Pack { r#in, out } => {
            let size = sv_cli::pack(&r#in, &out)?;
            println!("Save written: {} ({} bytes)", out.display(), size);
        }

        Commands::Unpack { r#in, out } => {
            let m = sv_cli::unpack(&r#in, &out)?;
            println!("Snapshot restored: {} ({})", out.display(), m.current().score_display());
        }
    }

    Ok(())
}
