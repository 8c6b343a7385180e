use clap::Parser;
use env_logger::Env;
use seolyzer::errors::ErrorHandler;
use seolyzer::structs::cli::Cli;
use seolyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let mut runner = CommandRunner::new();
    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}
