use std::process;

use anyhow::{bail, Context, Result};

use sortviz::{
    config::RunConfig,
    driver::Driver,
    engine::{element::DEFAULT_SCALE, AlgorithmKind},
    player::Player,
    renderer::NullSurface,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const RUN_USAGE: &str = "sortviz run <config.json>";
const QUICK_USAGE: &str = "sortviz quick <algorithm> [count]";
const RACE_USAGE: &str = "sortviz race [config.json]";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("run") => {
            let config_path = args.next().context(RUN_USAGE)?;
            let config = RunConfig::load(&config_path)?;
            play(config)
        }
        Some("quick") => {
            let algorithm = args.next().context(QUICK_USAGE)?;
            let mut config = RunConfig {
                algorithm,
                ..RunConfig::default()
            };
            if let Some(count) = args.next() {
                config.count = count
                    .parse()
                    .with_context(|| format!("Invalid element count '{count}'"))?;
            }
            play(config)
        }
        Some("race") => {
            let config = match args.next() {
                Some(path) => RunConfig::load(&path)?,
                None => RunConfig::default(),
            };
            race(config)
        }
        _ => bail!(
            "sortviz — terminal sorting-algorithm visualizer\n\nUsage:\n  {RUN_USAGE}\n  {QUICK_USAGE}\n  {RACE_USAGE}"
        ),
    }
}

fn play(config: RunConfig) -> Result<()> {
    let mut player = Player::new(config)?;
    player.play()
}

/// Run every algorithm headlessly over the same dataset and print a
/// ranking. Equal tick counts share a place.
fn race(config: RunConfig) -> Result<()> {
    let dataset = config.generate_dataset();
    if dataset.is_empty() {
        bail!("race needs a non-empty dataset; set count > 0");
    }

    let mut results = Vec::new();
    for kind in AlgorithmKind::ALL {
        let mut driver = Driver::new(kind);
        driver.load(&dataset, DEFAULT_SCALE)?;
        let completion = driver.run_to_completion(&mut NullSurface)?;
        results.push((kind, completion));
    }
    results.sort_by_key(|(_, c)| c.ticks);

    println!("Race over {} elements:", dataset.len());
    let mut place = 0u32;
    let mut prev_ticks = None;
    for (kind, completion) in &results {
        if prev_ticks != Some(completion.ticks) {
            place += 1;
            prev_ticks = Some(completion.ticks);
        }
        println!(
            "  {place}. {:<10} {} ticks ({:.3}s)",
            kind.name(),
            completion.ticks,
            completion.elapsed.as_secs_f64(),
        );
    }

    Ok(())
}
