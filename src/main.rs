mod app;
mod config;
mod error;
mod npc;
mod render;
mod timing;
mod world;

use app::SimContext;
use config::SimConfig;
use rand::Rng;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::default();
    match serde_json::to_string(&config) {
        Ok(json) => log::info!("Config: {}", json),
        Err(e) => log::warn!("Could not serialize config: {}", e),
    }

    // Logged so a run's starting positions can be rebuilt with World::with_seed
    let seed: u64 = rand::rng().random();
    log::info!("Seed: {}", seed);

    let context = SimContext::new(config, seed)?;
    context.run()?;

    Ok(())
}
