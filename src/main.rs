use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use tracing::info;

use times_table_drill::config::AppConfig;
use times_table_drill::console::Console;
use times_table_drill::logging::init_logger;

type MainResult = Result<(), Box<dyn Error>>;

fn main() -> MainResult {
    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::resolve(path)?;
    init_logger(&config.log);
    info!(seeded = config.rng_seed.is_some(), "times-table starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run(&config)?;

    Ok(())
}
