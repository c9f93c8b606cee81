//! ghorg - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use ghorg::{
    run_check_command, run_conceal_command, run_list_command, run_publicize_command,
    run_remove_command, Cli, Command, GhClient, TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting ghorg v{}", env!("CARGO_PKG_VERSION"));
    debug!("API URL: {}, batch: {}", cli.api_url, cli.batch);

    let token = TokenResolver::resolve(cli.token.as_deref());
    let client = GhClient::new(token, &cli.api_url);
    debug!("Authenticated: {}", client.is_authenticated());

    let result = match &cli.command {
        Command::List(_) => run_list_command(&client, &cli).await,
        Command::Check(_) => match run_check_command(&client, &cli).await {
            Ok(true) => Ok(()),
            Ok(false) => return ExitCode::from(1),
            Err(e) => Err(e),
        },
        Command::Remove(_) => run_remove_command(&client, &cli).await,
        Command::Publicize(_) => run_publicize_command(&client, &cli).await,
        Command::Conceal(_) => run_conceal_command(&client, &cli).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
