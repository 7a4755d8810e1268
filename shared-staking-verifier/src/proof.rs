use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A claimed link between a protocol staker and a consensus validator,
/// backed by two `Shared-Staking` transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProofRecord {
    /// Human-readable operator name, only used for logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `kyvevaloper...` address of the chain node.
    pub consensus_address: String,
    /// `kyve...` address of the protocol node.
    pub protocol_address: String,
    /// Hash of the transfer from the protocol address to the operator account.
    pub proof_1: String,
    /// Hash of the transfer from the operator account back to the protocol address.
    pub proof_2: String,
}

impl ProofRecord {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let record: Self = serde_json::from_str(json)?;
        Ok(record)
    }

    /// Reads and validates a record. Unparsable content and empty fields are
    /// both reported as [`Error::InvalidRecord`] for `path`.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let record = Self::from_json_str(&content).map_err(|e| Error::InvalidRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if let Some(field) = record.first_empty_field() {
            return Err(Error::InvalidRecord {
                path: path.to_path_buf(),
                reason: format!("field `{}` is empty", field),
            });
        }
        Ok(record)
    }

    pub fn first_empty_field(&self) -> Option<&'static str> {
        [
            ("consensus_address", &self.consensus_address),
            ("protocol_address", &self.protocol_address),
            ("proof_1", &self.proof_1),
            ("proof_2", &self.proof_2),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.consensus_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "consensus_address": "kyvevaloper1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc56upgr6",
        "protocol_address": "kyve14w46h2at4w46h2at4w46h2at4w46h2attqhr6e",
        "proof_1": "AAAA",
        "proof_2": "BBBB"
    }"#;

    #[test]
    fn test_parse_record() {
        let record = ProofRecord::from_json_str(RECORD).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.proof_1, "AAAA");
        assert_eq!(record.first_empty_field(), None);
        assert_eq!(record.label(), record.consensus_address);
    }

    #[test]
    fn test_missing_and_unknown_fields_are_rejected() {
        let missing = r#"{"consensus_address": "a", "protocol_address": "b", "proof_1": "c"}"#;
        assert!(ProofRecord::from_json_str(missing).is_err());

        let unknown = r#"{"consensus_address": "a", "protocol_address": "b",
            "proof_1": "c", "proof_2": "d", "proof_3": "e"}"#;
        assert!(ProofRecord::from_json_str(unknown).is_err());
    }

    #[tokio::test]
    async fn test_empty_field_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(
            &path,
            r#"{"name": "op", "consensus_address": "a", "protocol_address": "b",
                "proof_1": "", "proof_2": "d"}"#,
        )
        .unwrap();

        match ProofRecord::from_json_file(&path).await {
            Err(Error::InvalidRecord { reason, .. }) => assert!(reason.contains("proof_1")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
