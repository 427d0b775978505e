use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use returns_desk::cli::{Cli, Commands, ConfigAction};
use returns_desk::commands::{
    CreateOptions, LsOptions, cmd_browse, cmd_channels, cmd_config_get, cmd_config_set,
    cmd_config_show, cmd_create, cmd_ls, cmd_scan, cmd_stores,
};
use returns_desk::error::ReturnsError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("returns_desk=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            search,
            limit,
            pages,
            all,
            output,
        } => {
            cmd_ls(
                LsOptions {
                    search,
                    limit,
                    pages,
                    all,
                },
                output,
            )
            .await
        }

        Commands::Create {
            tracking,
            channel,
            store,
            output,
        } => {
            cmd_create(
                CreateOptions {
                    tracking,
                    channel,
                    store,
                },
                output,
            )
            .await
        }

        Commands::Stores { filter, output } => cmd_stores(filter.as_deref(), output).await,
        Commands::Channels { filter, output } => cmd_channels(filter.as_deref(), output).await,

        Commands::Browse { limit } => cmd_browse(limit).await,
        Commands::Scan { cooldown } => cmd_scan(cooldown).await,

        Commands::Config { action } => match action {
            ConfigAction::Show { output } => cmd_config_show(output),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(ReturnsError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
