use anyhow::Result;
use clap::Parser;

use pals::config::ServerConfig;
use pals::dataset::Dataset;
use pals::graphql::{build_schema, run_server};
use pals::logging;

#[derive(Parser)]
#[command(name = "pals")]
#[command(
    author,
    version,
    about = "A tutorial GraphQL API serving a tiny in-memory social graph"
)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value_t = ServerConfig::default().host)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = ServerConfig::default().port)]
    port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        ..ServerConfig::default()
    };
    let schema = build_schema(&config, Dataset::seed());

    println!(
        "Starting GraphQL server on http://{}:{}",
        config.host, config.port
    );
    println!(
        "GraphQL Playground: http://{}:{}",
        config.host, config.port
    );

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &config).await })?;
    Ok(())
}
