mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "po10")]
#[command(about = "Scrape Power of 10 results for a roster of athletes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up every athlete in the roster and write CSV and HTML reports
    Scrape {
        /// YAML roster to use instead of the built-in one
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Directory that receives `results/` and `index.html`
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Look up a single athlete and print their results
    Show {
        first_name: String,
        last_name: String,

        /// Club to search under
        #[arg(long)]
        club: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = po10_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Scrape {
        roster: None,
        output_dir: None,
    });

    match command {
        Commands::Scrape { roster, output_dir } => {
            let roster_path = roster.or_else(|| config.roster_path.clone());
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            run::run_scrape_command(&config, roster_path.as_deref(), &output_dir).await?;
        }
        Commands::Show {
            first_name,
            last_name,
            club,
        } => {
            run::run_show_command(&config, &first_name, &last_name, club.as_deref()).await?;
        }
    }

    Ok(())
}
