use std::path::{Path, PathBuf};

use crate::chain::ChainApi;
use crate::proof::ProofRecord;
use crate::verifier::verify_proof;
use crate::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStatus {
    pub correct: usize,
    pub error: usize,
}

impl NetworkStatus {
    pub fn passed(&self) -> bool {
        self.error == 0
    }
}

/// Result of verifying a single proof file.
#[derive(Debug)]
pub struct ProofOutcome {
    pub file_name: String,
    pub result: Result<()>,
}

/// Lists the proof files of a directory: regular, non-hidden files sorted
/// by name.
pub async fn list_proof_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

async fn verify_file<C: ChainApi + ?Sized>(chain: &C, path: &Path) -> Result<()> {
    let proof = ProofRecord::from_json_file(path).await?;
    log::debug!("verifying proof for {}", proof.label());
    verify_proof(chain, &proof).await
}

/// Verifies every proof file in `proofs_dir`, one at a time. A failing proof
/// is counted and reported through `on_outcome` but never stops the batch.
/// Only a directory that cannot be listed is an error.
pub async fn verify_network<C, F>(
    network_name: &str,
    chain: &C,
    proofs_dir: &Path,
    mut on_outcome: F,
) -> Result<NetworkStatus>
where
    C: ChainApi + ?Sized,
    F: FnMut(&ProofOutcome),
{
    let files = list_proof_files(proofs_dir).await?;
    log::info!(
        "verifying {} proofs for {} from {}",
        files.len(),
        network_name,
        proofs_dir.display()
    );

    let mut status = NetworkStatus::default();
    for path in files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result = verify_file(chain, &path).await;
        match &result {
            Ok(()) => status.correct += 1,
            Err(e) => {
                log::warn!("[{}] {} failed: {}", network_name, file_name, e);
                status.error += 1;
            }
        }
        on_outcome(&ProofOutcome { file_name, result });
    }

    Ok(status)
}

pub fn all_passed<'a>(statuses: impl IntoIterator<Item = &'a NetworkStatus>) -> bool {
    statuses.into_iter().all(NetworkStatus::passed)
}

pub fn exit_code<'a>(statuses: impl IntoIterator<Item = &'a NetworkStatus>) -> i32 {
    if all_passed(statuses) {
        0
    } else {
        1
    }
}
