use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use shared_staking_verifier::chain::rest::RestClient;
use shared_staking_verifier::chain::ChainApi;
use shared_staking_verifier::networks::{Config, NetworkInfo};
use shared_staking_verifier::runner::exit_code;
use shared_staking_verifier::{verify_network, NetworkStatus, ProofOutcome};

#[derive(Debug, Parser)]
#[command(about = "Verify the Shared-Staking proofs of each network")]
pub struct Opts {
    /// Directory holding one sub-directory of proof files per network.
    #[clap(long, default_value = "validator-proofs")]
    dir: PathBuf,

    /// Network to verify. Repeat to select several; defaults to all configured networks.
    #[clap(long = "network")]
    networks: Vec<String>,

    /// JSON config file listing networks and their API endpoints.
    #[clap(long, env = "SHARED_STAKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API endpoint. Requires exactly one --network.
    #[clap(long)]
    endpoint: Option<String>,

    /// Per-request timeout. Requests are never retried.
    #[clap(long)]
    timeout_secs: Option<u64>,
}

pub async fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn select_networks(
    configured: Vec<NetworkInfo>,
    names: &[String],
    endpoint: Option<&str>,
) -> Result<Vec<NetworkInfo>> {
    let mut selected = if names.is_empty() {
        configured
    } else {
        names
            .iter()
            .map(|name| {
                configured
                    .iter()
                    .find(|network| &network.name == name)
                    .cloned()
                    .ok_or_else(|| {
                        let available: Vec<&str> =
                            configured.iter().map(|n| n.name.as_str()).collect();
                        anyhow!(
                            "Network '{}' not found. Available networks: {}",
                            name,
                            available.join(", ")
                        )
                    })
            })
            .collect::<Result<Vec<_>>>()?
    };

    if let Some(endpoint) = endpoint {
        if selected.len() != 1 {
            return Err(anyhow!("--endpoint requires exactly one --network"));
        }
        selected[0].api_endpoint = endpoint.to_string();
    }

    Ok(selected)
}

/// Status line for one proof file, followed by the error on failure.
fn format_outcome(network: &NetworkInfo, outcome: &ProofOutcome) -> String {
    match &outcome.result {
        Ok(()) => format!("[{}] {} ✅", network.display_name(), outcome.file_name),
        Err(e) => format!("[{}] {} ❌\n{}", network.display_name(), outcome.file_name, e),
    }
}

/// Verifies each network in turn against the chain returned by `chain_for`.
/// A network whose proofs cannot be listed counts as a single error.
pub async fn verify_networks<F, C>(
    networks: &[NetworkInfo],
    proofs_root: &Path,
    chain_for: F,
) -> Result<Vec<NetworkStatus>>
where
    F: Fn(&NetworkInfo) -> Result<C>,
    C: ChainApi,
{
    let mut statuses = Vec::with_capacity(networks.len());

    for network in networks {
        let chain = chain_for(network)?;
        let proofs_dir = proofs_root.join(&network.name);
        log::info!("Verifying {} against {}", network.name, network.api_endpoint);

        let status = match verify_network(&network.name, &chain, &proofs_dir, |outcome| {
            println!("{}", format_outcome(network, outcome))
        })
        .await
        {
            Ok(status) => status,
            Err(e) => {
                println!(
                    "[{}] Failed to read proofs from {}: {}",
                    network.display_name(),
                    proofs_dir.display(),
                    e
                );
                NetworkStatus {
                    correct: 0,
                    error: 1,
                }
            }
        };

        println!(
            "\n[{}] Correct: {}, Error: {}",
            network.display_name(),
            status.correct,
            status.error
        );
        statuses.push(status);
    }

    Ok(statuses)
}

/// Returns the process exit code: 0 when every network verified cleanly.
pub async fn run(opts: &Opts) -> Result<i32> {
    let config = load_config(opts.config.as_deref()).await?;
    let networks = select_networks(
        config.networks()?,
        &opts.networks,
        opts.endpoint.as_deref(),
    )?;
    let timeout = opts
        .timeout_secs
        .or(config.timeout_secs)
        .map(Duration::from_secs);

    let statuses = verify_networks(&networks, &opts.dir, |network| {
        RestClient::new(&network.api_endpoint, timeout)
            .with_context(|| format!("Failed to create API client for {}", network.name))
    })
    .await?;

    Ok(exit_code(&statuses))
}
