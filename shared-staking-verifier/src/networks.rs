use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A KYVE network whose proofs are verified against its REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Name of the network (e.g., "mainnet", "kaon"). Also the name of the
    /// directory holding its proof files.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Base URL of the REST API.
    pub api_endpoint: String,
}

impl NetworkInfo {
    /// Name as shown in status lines: each word capitalised, the rest
    /// lowercased, e.g. `Mainnet` or `My-Net`.
    pub fn display_name(&self) -> String {
        let mut display = String::with_capacity(self.name.len());
        let mut in_word = false;
        for c in self.name.chars() {
            if in_word {
                display.extend(c.to_lowercase());
            } else {
                display.extend(c.to_uppercase());
            }
            in_word = c.is_alphabetic();
        }
        display
    }
}

/// Optional JSON config replacing the built-in networks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub networks: Vec<NetworkInfo>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The configured networks, or the built-in ones when none are configured.
    pub fn networks(&self) -> Result<Vec<NetworkInfo>> {
        if self.networks.is_empty() {
            builtin::all()
        } else {
            Ok(self.networks.clone())
        }
    }
}

pub mod builtin {
    use super::NetworkInfo;
    use crate::Result;

    pub fn mainnet() -> Result<NetworkInfo> {
        Ok(serde_json::from_str(include_str!("../networks/mainnet/info.json"))?)
    }

    pub fn kaon() -> Result<NetworkInfo> {
        Ok(serde_json::from_str(include_str!("../networks/kaon/info.json"))?)
    }

    pub fn all() -> Result<Vec<NetworkInfo>> {
        Ok(vec![mainnet()?, kaon()?])
    }

    pub fn by_name(name: &str) -> Result<Option<NetworkInfo>> {
        match name {
            "mainnet" => mainnet().map(Some),
            "kaon" => kaon().map(Some),
            _ => Ok(None),
        }
    }
}
