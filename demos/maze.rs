//! Route a few movers across the island, one finder tick per frame.
//!
//! Run: cargo run --bin maze [seed]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tilepath::FinderConfig;
use tilepath_core::Point;
use tilepath_demos::{FrameLoop, ISLAND, random_spot, rocky};
use tilepath_map::{SWIMMERS, TileGrid, WALKERS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 7,
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let home = Point::new(5, 2);
    let island = TileGrid::parse(ISLAND)?;
    let grid = rocky(&island, &mut rng, 0.08, &[home]);

    let mut frames = FrameLoop::new(grid, FinderConfig::default())?;
    for i in 0..3 {
        if let Some(to) = random_spot(&frames.grid, &mut rng, WALKERS) {
            frames.request(&format!("walker {i}"), home, to, WALKERS);
        }
    }
    if let Some(to) = random_spot(&frames.grid, &mut rng, SWIMMERS) {
        frames.request("swimmer", home, to, SWIMMERS);
    }

    let n = frames.run(10_000);
    println!("{n} frames, {} expansions\n", frames.expansions());
    for d in frames.deliveries() {
        if d.path.is_empty() {
            println!("{}: {} -> {} unreachable (frame {})\n", d.label, d.from, d.to, d.frame);
            continue;
        }
        println!(
            "{}: {} -> {} in {} steps (frame {})",
            d.label,
            d.from,
            d.to,
            d.path.len(),
            d.frame
        );
        println!("{}", frames.grid.render(&d.path));
    }
    Ok(())
}
