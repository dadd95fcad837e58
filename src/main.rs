use clap::Parser;
use kafka_service_adapter::adapter::inbound::cli::{Cli, ServiceAdapter};
use kafka_service_adapter::error::GENERIC_EXIT_CODE;
use kafka_service_adapter::infrastructure::config::Settings;
use tracing::{debug, error};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { GENERIC_EXIT_CODE } else { 0 });
        }
    };

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(GENERIC_EXIT_CODE);
        }
    };

    settings.init_logging();
    debug!(command = cli.command.name(), "Handling callback");

    let adapter = ServiceAdapter::from_settings(&settings);
    match adapter.handle(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
        }
        Err(e) => {
            error!(error = %e.detail(), "Callback failed");
            let message = e.user_message();
            if !message.is_empty() {
                println!("{message}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
