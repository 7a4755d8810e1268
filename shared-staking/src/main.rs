mod cmds;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shared-staking")]
#[command(version)]
#[command(about = "Audit Shared-Staking proofs linking KYVE protocol stakers to consensus validators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Verify(cmds::verify::Opts),

    #[command(alias = "derive_address")]
    Derive(cmds::derive::Opts),

    #[command(alias = "network")]
    Networks(cmds::networks::Opts),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Verify(opts) => {
            let code = cmds::verify::run(opts).await?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Derive(opts) => cmds::derive::run(opts).await?,
        Commands::Networks(opts) => cmds::networks::run(opts).await?,
    }

    Ok(())
}
