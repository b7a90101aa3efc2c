use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tilemerge_core::{ChangeRule, Coord, GameConfig, OrientationTable};
use web_time::{Instant, SystemTime, UNIX_EPOCH};

mod config;
mod runner;

use runner::{GameSummary, Strategy};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OrientationArg {
    Reference,
    Inverse,
}

impl From<OrientationArg> for OrientationTable {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Reference => Self::Reference,
            OrientationArg::Inverse => Self::Inverse,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ChangeRuleArg {
    MergeOnly,
    AnyTileMoved,
}

impl From<ChangeRuleArg> for ChangeRule {
    fn from(arg: ChangeRuleArg) -> Self {
        match arg {
            ChangeRuleArg::MergeOnly => Self::MergeOnly,
            ChangeRuleArg::AnyTileMoved => Self::AnyTileMoved,
        }
    }
}

/// Plays seeded games headlessly and reports how they ended
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file holding the game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid side length, overrides the config file
    #[arg(long)]
    size: Option<Coord>,

    /// Direction table, overrides the config file
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// When a move counts as changed, overrides the config file
    #[arg(long, value_enum)]
    change_rule: Option<ChangeRuleArg>,

    /// Force a seed instead of one taken from the clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to play, each with the next seed
    #[arg(short = 'n', long, default_value_t = 1)]
    games: u32,

    /// Stop a game after this many moves
    #[arg(long, default_value_t = 10_000)]
    max_moves: u32,

    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    strategy: Strategy,

    /// Print summaries as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => config::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(orientation) = self.orientation {
            config.rules.orientation = orientation.into();
        }
        if let Some(change_rule) = self.change_rule {
            config.rules.change = change_rule.into();
        }
        Ok(GameConfig::new(config.size, config.rules)?)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("config: {:?}, seed: {}", config, seed);

    let started = Instant::now();
    let summaries = (0..args.games)
        .map(|game| {
            runner::play_game(
                config,
                seed.wrapping_add(game.into()),
                args.strategy,
                args.max_moves,
            )
        })
        .collect::<Result<Vec<GameSummary>, _>>()?;
    log::info!("Played {} games in {:?}", summaries.len(), started.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "seed {}: score {}, max tile {}, {} moves, {:?} ({})",
            summary.seed,
            summary.score,
            summary.max_tile,
            summary.moves,
            summary.status,
            summary.end
        );
    }
    let wins = summaries
        .iter()
        .filter(|summary| summary.won_at.is_some())
        .count();
    let best = summaries.iter().map(|summary| summary.score).max().unwrap_or(0);
    println!("{} games, {} won, best score {}", summaries.len(), wins, best);

    Ok(())
}
