use std::fs::{self, File};
use std::process::ExitCode;

use greetings::{GreetingsConfig, GreetingsError, Runtime, paths};
use simplelog::{Config, LevelFilter, WriteLogger};

fn init_logging() -> Result<(), GreetingsError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&path)?)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    match Runtime::new(GreetingsConfig::default()).run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
