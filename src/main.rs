use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::Dimensions;
use lifegrid::RuleSet;
use lifegrid::World;

const DEFAULT_DIMENSIONS: &str = "8x8";
const DEFAULT_GENERATIONS: usize = 4;
const LIFE_RULES: &str = "b3s23";

/// Glider heading toward the bottom right, as `(x, y)` offsets from the top left.
const GLIDER: [(isize, isize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    let dims: Dimensions = args
        .next()
        .as_deref()
        .unwrap_or(DEFAULT_DIMENSIONS)
        .parse()
        .context("Failed to read dimensions, expected WIDTHxHEIGHT")?;

    let generations = match args.next() {
        Some(n) => n.parse().context("Failed to read number of generations")?,
        None => DEFAULT_GENERATIONS,
    };

    let rules: RuleSet = args
        .next()
        .as_deref()
        .unwrap_or(LIFE_RULES)
        .parse()
        .context("Failed to read rules")?;

    let mut world = World::with_rules(dims.width(), dims.height(), rules)?;

    for (x, y) in GLIDER {
        world
            .set_cell(x, y, 1)
            .context("Glider does not fit in the world")?;
    }

    info!(%dims, %rules, generations, "running");

    print!("{world}");
    for _ in 0..generations {
        world.next_tick();

        println!();
        print!("{world}");
    }

    info!(population = world.population(), "done");

    Ok(())
}
