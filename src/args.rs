use std::path::PathBuf;

use clap::Parser;

use tui_2048::core::GameConfig;
use tui_2048::types::{DEFAULT_GOAL, DEFAULT_GRID_SIZE, DEFAULT_STARTING_TILES, FOUR_TILE_PERCENT};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Slide and merge tiles until you reach the goal.")]
pub struct Args {
    /// Width/height of the grid.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,
    /// Tile value that wins the game (a power of 2, at least 4).
    #[arg(long, default_value_t = DEFAULT_GOAL)]
    pub goal: u64,
    /// Tiles placed before the first move.
    #[arg(long, default_value_t = DEFAULT_STARTING_TILES)]
    pub starting_tiles: usize,
    /// Chance in percent that a new tile is a 4.
    #[arg(long, default_value_t = FOUR_TILE_PERCENT)]
    pub four_percent: u8,
    /// Start with one tile and always spawn a 4 in the top-left corner.
    #[arg(long)]
    pub lucky: bool,
    /// RNG seed; a random one is chosen (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
    /// Write logs to this file. Logging is off without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            goal: self.goal,
            starting_tiles: self.starting_tiles,
            four_percent: self.four_percent,
            lucky: self.lucky,
        }
    }
}
