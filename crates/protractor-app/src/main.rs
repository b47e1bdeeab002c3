//! Main application entry point.

use protractor_app::{App, AppConfig, AppError};

fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let summary = App::with_config(config).run()?;
    let json = summary.to_json().map_err(AppError::Serialize)?;
    println!("{json}");
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting Protractor");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
