use log::info;
use std::time::Instant;
use synpuf_study::{Result, StudyConfig, pipeline};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StudyConfig::from_args(std::env::args().skip(1));
    info!("{config}");

    let start = Instant::now();
    let statistics = pipeline::run(&config)?;

    info!("{}", statistics.summary());
    info!("Study completed in {:?}", start.elapsed());
    Ok(())
}
