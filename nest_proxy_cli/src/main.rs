mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nest_proxy_lib::{ProxyClient, ProxyConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nest-proxy")]
#[command(about = "Proxy and query the OWASP Nest API")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// TOML configuration file (environment variables still take precedence)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP proxy
    Serve(commands::serve::ServeArgs),
    /// List one page of a resource (chapters, members, events, ...)
    List(commands::list::ListArgs),
    /// Show a single record
    Show(commands::show::ShowArgs),
    /// List projects
    Projects(commands::projects::ProjectsArgs),
    /// List organizations
    Organizations(commands::organizations::OrganizationsArgs),
    /// Search projects by text and tags
    Search(commands::search::SearchArgs),
    /// Show landing-page statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nest_proxy=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let config = ProxyConfig::load(cli.config.as_deref())?;

    let client = ProxyClient::from_config(&config)?;

    match &cli.command {
        Commands::Serve(args) => commands::serve::run(args, client, config.bind).await?,
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Show(args) => commands::show::run(args, &client, &format).await?,
        Commands::Projects(args) => commands::projects::run(args, &client, &format).await?,
        Commands::Organizations(args) => {
            commands::organizations::run(args, &client, &format).await?
        }
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Stats => commands::stats::run(&client, &format).await?,
    }

    Ok(())
}
