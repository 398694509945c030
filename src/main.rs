use std::process::ExitCode;

use log::error;

use numint::configuration::Configuration;

const DEFAULT_CONFIG_PATH: &str = "demos/config.json";

fn main() -> ExitCode {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = Configuration::new();
    if let Err(err) = config.from_reader(&config_path) {
        error!("cannot load {}: {}", config_path, err);
        return ExitCode::FAILURE;
    }

    for outcome in config.run_jobs() {
        match outcome.result() {
            Ok(value) => println!("{:<32} {:>20.10}", outcome.name(), value),
            Err(err) => println!("{:<32} error: {}", outcome.name(), err)
        }
    }
    ExitCode::SUCCESS
}
