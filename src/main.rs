use clap::{Parser, Subcommand};
use scanforge::frequencies::FrequencyTable;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// symbol,weight CSV replacing the built-in English frequency table
    #[arg(global = true, short, long)]
    frequencies: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the timing battery over the standard utterances
    Simulate(cmd::simulate::SimulateArgs),
    /// Print the standard grid layouts
    Show(cmd::show::ShowArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let table = match &cli.frequencies {
        Some(path) => {
            info!("📂 Loading Frequencies: {}", path);
            match FrequencyTable::load_from_file(path) {
                Ok(table) => table,
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => FrequencyTable::english(),
    };

    let outcome = match cli.command {
        Commands::Simulate(args) => cmd::simulate::run(args, &table),
        Commands::Show(args) => cmd::show::run(args, &table),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
