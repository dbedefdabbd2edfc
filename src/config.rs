use std::path::PathBuf;

use clap::Parser;

use crate::difficulty::Difficulty;

pub const DEFAULT_RENDER_FPS: u64 = 60;
pub const FPS_ENV: &str = "GRID_CHASE_FPS";

#[derive(Debug, Parser)]
#[command(name = "chase", about = "Eat the pellets, dodge the ghosts.")]
pub struct Args {
    /// easy, medium, hard or hardcore
    #[arg(short, long, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Where points and cosmetics are kept between runs
    #[arg(long, default_value = "grid_chase_progress.json")]
    pub store: PathBuf,

    /// Write a debug log to --log-file
    #[arg(long)]
    pub debug: bool,

    #[arg(long, default_value = "grid_chase.log")]
    pub log_file: PathBuf,
}

pub fn read_render_fps() -> u64 {
    parse_fps(std::env::var(FPS_ENV).ok())
}

fn parse_fps(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_RENDER_FPS)
}
