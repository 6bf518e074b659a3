// Cleaner entry point: no arguments, paths come from settings.
use cleaner::config::settings::CleanerSettings;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt::init();

    let settings = match CleanerSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    info!(
        "Cleaning {} -> {}",
        settings.input_path.display(),
        settings.output_path.display()
    );

    cleaner::clean(&settings.input_path, &settings.output_path);
}
