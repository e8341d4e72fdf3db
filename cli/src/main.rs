mod commands;
mod terminal;

use anyhow::Context;
use commands::{BackendArgs, CommandLine, Commands, call, serve};
use paybff_core::adapters::inbound::query::Api;
use paybff_core::adapters::outbound::Gateways;
use terminal::{logging, print};
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before parsing so that flags can fall back on it.
    let env_file = dotenvy::dotenv();
    let commands = CommandLine::parse_args();

    logging::init();
    if let Some(error) = env_file_error(env_file) {
        warn!(%error, "Ignoring unreadable .env file");
    }

    match commands.command {
        Commands::Operations => {
            print::operations();
            Ok(())
        }
        Commands::Serve { port } => {
            print::header("starting server");
            let api = connect(&commands.backend).await?;
            serve::serve(api, port).await
        }
        Commands::Call { document } => {
            let api = connect(&commands.backend).await?;
            call::call(&api, &document).await
        }
    }
}

async fn connect(args: &BackendArgs) -> anyhow::Result<Api> {
    let config = args.config();
    let gateways = Gateways::connect(&config)
        .await
        .context("failed to set up backend connections")?;
    Ok(Api::new(gateways.payment, gateways.booking))
}

/// A missing `.env` is normal; anything else is worth reporting.
fn env_file_error<T>(result: dotenvy::Result<T>) -> Option<dotenvy::Error> {
    result.err().filter(|error| !error.not_found())
}
