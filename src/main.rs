//! Headless Clear Cell runner (default binary).
//!
//! Builds an engine from `CLEAR_CELL_*` environment variables, plays it with
//! the autoplay driver and prints the final board. There is no rendering or
//! interactive input; set `RUST_LOG=debug` to follow each step.

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use clear_cell::config::DriverConfig;
use clear_cell::core::Engine;
use clear_cell::driver::autoplay;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DriverConfig::from_env();
    info!("[Driver] {:?}", config);

    let tiles = StdRng::seed_from_u64(config.seed);
    let mut picker = StdRng::seed_from_u64(config.seed.wrapping_add(1));

    let mut engine = Engine::with_config(config.engine_config(), tiles)
        .context("invalid board configuration")?;
    autoplay(&mut engine, &mut picker, config.max_steps).context("autoplay failed")?;

    if config.json {
        let json = serde_json::to_string_pretty(&engine.snapshot())
            .context("failed to serialize snapshot")?;
        println!("{}", json);
    } else {
        print!("{}", engine.dump());
        println!("Score: {}", engine.score());
    }
    Ok(())
}
