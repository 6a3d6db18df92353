mod cli;

use crate::cli::{Cli, Commands};

use memoir_server::api::users::user_dto::UserDto;
use memoir_server::commands::reset_password::{self, ResetPasswordArgs};
use memoir_server::commands::{serve, version};
use memoir_server::logger;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use memoir_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // `version` needs neither config nor logger.
    if matches!(cli.command, Some(Commands::Version)) {
        println!("{}", version::VersionInfo::collect());
        return ExitCode::SUCCESS;
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logger(&config) {
        eprintln!("Logger error: {}", e);
        return ExitCode::FAILURE;
    }

    Config::warn_legacy();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            info!("Starting memoir v{}", env!("CARGO_PKG_VERSION"));
            config.log_summary();

            match serve::run(config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::ResetPassword(args) => run_reset_password(&config, &args).await,

        Commands::Version => unreachable!("handled before config load"),
    }
}

/// Run the maintenance reset and report the structured result as status
/// text. All formatting lives here; the command itself returns a value.
async fn run_reset_password(config: &Config, args: &ResetPasswordArgs) -> ExitCode {
    println!("MAINTENANCE MODE: reset-password");

    match reset_password::run(config, args).await {
        Ok(user) => {
            match serde_json::to_string_pretty(&UserDto::from(user)) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to render updated user: {}", e),
            }
            println!("SUCCESS: password reset");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            if e.is_usage_error() {
                eprintln!(
                    "Usage: memoir reset-password [--id <id>] [--username <username>] \
                     [--email <email>] --password <password>"
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> memoir_config::Result<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

fn init_logger(config: &Config) -> memoir_server::Result<()> {
    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)
}
