use anyhow::{Result, bail};
use clap::Parser;
use log::debug;
use maze_core::{Cell, Grid, MazeGenerator, MazeParams, MazeRng, SeededRng};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
}

/// Counts draws so termination can be checked against the anchor count.
struct CountingRng {
    inner: SeededRng,
    draws: usize,
}

impl MazeRng for CountingRng {
    fn random_value(&mut self, min: i32, max: i32) -> i32 {
        self.draws += 1;
        self.inner.random_value(min, max)
    }
}

fn pick(rng: &mut ChaCha8Rng, low: usize, high: usize) -> usize {
    low + (rng.next_u64() % (high - low + 1) as u64) as usize
}

fn random_params(rng: &mut ChaCha8Rng) -> MazeParams {
    MazeParams {
        width: pick(rng, 1, 96),
        height: pick(rng, 1, 96),
        row_spacing: pick(rng, 1, 12),
        col_spacing: pick(rng, 1, 12),
        point_chance: pick(rng, 0, 100) as f32 / 100.0,
    }
}

fn check_invariants(grid: &Grid, params: &MazeParams) -> Result<()> {
    if (grid.width(), grid.height()) != (params.width, params.height) {
        bail!(
            "grid is {}x{}, expected {}x{}",
            grid.width(),
            grid.height(),
            params.width,
            params.height
        );
    }
    let open_border =
        grid.positions().find(|&pos| grid.is_border(pos) && grid.cell(pos) != Cell::Wall);
    if let Some(pos) = open_border {
        bail!("border cell {pos:?} is not a wall");
    }
    if grid.count(Cell::Item) > 0 {
        bail!("generator produced item cells");
    }
    Ok(())
}

fn anchor_candidates(params: &MazeParams) -> usize {
    let interior = |size: usize, spacing: usize| {
        (1..size.saturating_sub(1)).filter(|coord| coord % spacing == 0).count()
    };
    interior(params.width, params.col_spacing) * interior(params.height, params.row_spacing)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting maze fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let params = random_params(&mut rng);
        let maze_seed = rng.next_u64();
        debug!("run {run}: seed={maze_seed} params={params:?}");

        let generator = MazeGenerator::new(params)?;
        let mut counting = CountingRng { inner: SeededRng::new(maze_seed), draws: 0 };
        let grid = generator.generate(&mut counting)?;
        check_invariants(&grid, &params)?;

        // One chance draw per candidate, then a shuffle draw and a direction draw per anchor.
        let candidates = anchor_candidates(&params);
        if counting.draws > 3 * candidates {
            bail!("run {run}: {} draws for {candidates} anchor candidates", counting.draws);
        }

        let replay = generator.generate(&mut SeededRng::new(maze_seed))?;
        if replay != grid {
            bail!("run {run}: seed {maze_seed} did not reproduce the same grid");
        }
    }

    println!("Fuzz complete: {} mazes satisfied all invariants.", args.runs);
    Ok(())
}
