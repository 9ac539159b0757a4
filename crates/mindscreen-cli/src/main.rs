use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mindscreen_cli::{Cli, Command, load_config, read_input, run_instruments, run_score, run_stats};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let output = match &cli.command {
        Command::Score(args) => {
            let config = load_config(args.config.as_deref())?;
            run_score(&read_input(&args.input)?, args, &config)?
        }
        Command::Stats(args) => run_stats(&read_input(&args.input)?, args)?,
        Command::Instruments(args) => run_instruments(args)?,
    };
    println!("{output}");
    Ok(())
}
