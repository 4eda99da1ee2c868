use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{
    ArrivalEvent, FrameControls, GameSession, MazeConfig, RecordingSurface, TileKind,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const FRAME_SECONDS: f64 = 1.0 / 60.0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    frames: u32,
    /// Render width used for ray casting; smaller runs faster
    #[arg(long, default_value_t = 160)]
    screen_width: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} frames...", args.seed, args.frames);
    let config = MazeConfig { screen_width: args.screen_width, ..MazeConfig::default() };
    let mut game = GameSession::new(config, args.seed)?;
    // Inputs come from their own stream so they never shift the maze's random sequence.
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed ^ 0x5EED_F0CA_CC1A);
    let mut surface = RecordingSurface::new();
    let mut explored_before = game.grid().explored_mask().to_vec();
    let mut pieces = 0;

    for frame in 0..args.frames {
        let controls = FrameControls {
            turn: choose(&mut rng, &[-1.0, 0.0, 0.0, 1.0]),
            mouse_dx: choose(&mut rng, &[-60.0, 0.0, 0.0, 0.0, 0.0, 30.0]),
            // Bias toward walking ahead so the walk actually covers ground
            forward: choose(&mut rng, &[-1.0, 0.0, 1.0, 1.0, 1.0]),
            strafe: choose(&mut rng, &[-1.0, 0.0, 0.0, 0.0, 1.0]),
        };
        if rng.next_u64() % 120 == 0 {
            game.toggle_minimap();
        }

        let arrival = game.frame(&controls, FRAME_SECONDS);
        surface.commands.clear();
        game.render(&mut surface);

        match arrival {
            Some(ArrivalEvent::ExitReached { level }) => {
                println!("Frame {frame}: exit taken, now on level {level}");
            }
            Some(ArrivalEvent::MapPieceCollected { at }) => {
                pieces += 1;
                println!("Frame {frame}: map piece collected at ({}, {})", at.x, at.y);
            }
            None => {}
        }

        // Assert invariants
        let pose = game.pose();
        if game.grid().tile_at(pose.cell()).blocks_movement() {
            bail!("Invariant failed: pose {pose:?} inside a wall at frame {frame}");
        }
        let exits = game.grid().count(TileKind::Exit);
        if exits != 1 {
            bail!("Invariant failed: {exits} exits at frame {frame}");
        }
        let explored_now = game.grid().explored_mask();
        let regenerated = matches!(arrival, Some(ArrivalEvent::ExitReached { .. }));
        if !regenerated && explored_before.iter().zip(explored_now).any(|(&was, &is)| was && !is) {
            bail!("Invariant failed: explored cell hidden again at frame {frame}");
        }
        explored_before = explored_now.to_vec();
    }

    println!(
        "Fuzz complete: level {}, {} map pieces, {} cells explored",
        game.level(),
        pieces,
        game.grid().explored_count()
    );
    Ok(())
}
