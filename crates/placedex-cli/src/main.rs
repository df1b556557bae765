use std::path::PathBuf;

use clap::{Parser, Subcommand};

use placedex_core::load_app_config;

mod collect;
mod load;

#[derive(Debug, Parser)]
#[command(name = "placedex")]
#[command(about = "Collects and loads the scored place index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sweep the search grid and write the compressed index file.
    Collect {
        /// Override the configured grid resolution (grid is steps × steps).
        #[arg(long)]
        steps: Option<u32>,
        /// Override the configured index output path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Normalize the index file and upload it to the document store.
    Load {
        /// Override the configured index input path.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Override the configured target collection.
        #[arg(long)]
        collection: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = load_app_config()?;

    match cli.command {
        Commands::Collect { steps, output } => {
            if let Some(steps) = steps {
                config.grid_steps = steps;
            }
            if let Some(output) = output {
                config.index_path = output;
            }
            collect::run(&config).await
        }
        Commands::Load { input, collection } => {
            if let Some(input) = input {
                config.index_path = input;
            }
            if let Some(collection) = collection {
                config.collection = collection;
            }
            load::run(&config).await
        }
    }
}
