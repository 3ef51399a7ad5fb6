use clap::Parser;
use country_density::cli::{Cli, Commands};
use country_density::config::{DEFAULT_CONFIG_PATH, get_config, init_config_from};
use country_density::runtime::modes;
use country_density::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    init_config_from(config_path);

    match cli.command {
        None | Some(Commands::Serve) => {
            let _guard = init_logging(&get_config())?;
            modes::run_server().await
        }
        Some(cmd) => {
            // CLI output goes to stdout; logs only when a file is configured
            let _guard = if get_config()
                .logging
                .file
                .as_deref()
                .is_some_and(|f| !f.is_empty())
            {
                Some(init_logging(&get_config())?)
            } else {
                None
            };

            if let Err(e) = modes::run_cli(cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
