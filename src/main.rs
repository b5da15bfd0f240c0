use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shopscout::app::AppContext;
use shopscout::cli::{commands, Cli, Commands};
use shopscout::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            site,
            route,
            submit,
            output,
            headed,
        } => {
            let (site, mut config) = commands::prepare(&site, || match cli.config {
                Some(path) => Config::load_from(&path),
                None => Config::load(),
            })?;
            if headed {
                config.scraper.headless = false;
            }
            if submit {
                config.backend.submit_to_backend = true;
            }
            if let Some(output) = output {
                config.output.path = output;
            }
            let route = route.unwrap_or_else(|| config.backend.route.clone());

            let ctx = AppContext::new(config)?;
            commands::search(&ctx, site, &query, &route).await?;
        }
        Commands::Sites => {
            commands::list_sites()?;
        }
    }

    Ok(())
}
