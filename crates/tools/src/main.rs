use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_core::{Grid, MazeConfig, MazeGenerator, Pos, SeededRng, TileKind};

#[derive(Parser)]
#[command(author, version, about = "Print generated mazes as ASCII", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// TOML file overriding the default generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of consecutive mazes to generate, as if the player kept taking the exit
    #[arg(short, long, default_value_t = 1)]
    levels: u32,
    /// Print only the statistics
    #[arg(long)]
    stats_only: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => MazeConfig::default(),
    };
    let generator = MazeGenerator::new(config).context("Invalid maze config")?;
    let mut rng = SeededRng::new(args.seed);
    info!("generating {} level(s) from seed {}", args.levels, args.seed);

    let mut maze = generator.generate(&mut rng);
    for level in 1..=args.levels.max(1) {
        if level > 1 {
            maze.spawn = generator.regenerate(&mut maze.grid, &mut maze.rooms, &mut rng);
        }
        let exit = maze.grid.positions_of(TileKind::Exit).first().copied();

        println!("Level {level}");
        if !args.stats_only {
            print!("{}", render_ascii(&maze.grid, maze.spawn.cell()));
        }
        println!("Rooms: {}", maze.rooms.len());
        println!("Open cells: {}", maze.grid.count(TileKind::Path));
        println!("Map pieces: {}", maze.grid.count(TileKind::Collectible));
        match exit {
            Some(pos) => println!("Exit: ({}, {})", pos.x, pos.y),
            None => println!("Exit: none"),
        }
        println!("Fingerprint: 0x{:016x}", maze.grid.fingerprint());
    }

    Ok(())
}

fn render_ascii(grid: &Grid, spawn: Pos) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Pos { y, x };
            let glyph = if pos == spawn {
                '@'
            } else {
                match grid.tile_at(pos) {
                    TileKind::Wall => '#',
                    TileKind::Path => '.',
                    TileKind::Exit => 'E',
                    TileKind::Collectible => 'M',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
