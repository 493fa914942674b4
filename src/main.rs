use anyhow::Error;
use clap::Parser;
use expense_tracker::cli::{command, Cli, Commands};
use expense_tracker::configuration::get_configuration;
use expense_tracker::telemetry::{get_subscriber, init_subscriber, CLI_LOG_LEVEL};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    // Logs go to stderr so they don't interleave with the expense table
    let subscriber = get_subscriber(
        "expense-tracker".into(),
        CLI_LOG_LEVEL.into(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    let config = get_configuration()?;

    match cli.command {
        Commands::List {} => {
            command::list(&config).await?;
        }

        Commands::Add {
            name,
            amount,
            category,
        } => {
            command::add(&config, name, amount, category).await?;
        }

        Commands::Edit {
            id,
            name,
            amount,
            category,
        } => {
            command::edit(&config, id.into(), name, amount, category).await?;
        }

        Commands::Delete { id } => {
            command::delete(&config, id.into()).await?;
        }

        Commands::Shell {} => {
            command::shell(&config).await?;
        }

        Commands::Init {} => {
            command::init()?;
        }
    }

    Ok(())
}
