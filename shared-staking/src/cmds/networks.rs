use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::cmds::verify::load_config;

#[derive(Debug, Parser)]
#[command(about = "List the networks proofs are verified against")]
pub struct Opts {
    #[clap(long, env = "SHARED_STAKING_CONFIG")]
    config: Option<PathBuf>,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let config = load_config(opts.config.as_deref()).await?;

    println!("Configured networks:\n");
    for network in config.networks()? {
        println!("  {} - {}", network.name, network.description);
        println!("    API: {}", network.api_endpoint);
    }
    if let Some(timeout) = config.timeout_secs {
        println!("\nRequest timeout: {}s", timeout);
    }

    Ok(())
}
