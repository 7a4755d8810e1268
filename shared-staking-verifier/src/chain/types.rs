use serde::{Deserialize, Serialize};

/// `GET /cosmos/tx/v1beta1/txs/{hash}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResponse {
    pub tx: Tx,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    pub body: TxBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxBody {
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub messages: Vec<TxMessage>,
}

/// A transaction message. Only bank transfers carry both addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMessage {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
}

impl TxResponse {
    pub fn transfer(memo: &str, from_address: &str, to_address: &str) -> Self {
        Self {
            tx: Tx {
                body: TxBody {
                    memo: memo.to_string(),
                    messages: vec![TxMessage {
                        type_url: Some("/cosmos.bank.v1beta1.MsgSend".to_string()),
                        from_address: Some(from_address.to_string()),
                        to_address: Some(to_address.to_string()),
                    }],
                },
            },
        }
    }

    pub fn memo(&self) -> &str {
        &self.tx.body.memo
    }

    pub fn first_message(&self) -> Option<&TxMessage> {
        self.tx.body.messages.first()
    }
}

/// `GET /cosmos/staking/v1beta1/validators/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorResponse {
    pub validator: Validator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub operator_address: String,
}

/// `GET /kyve/query/v1beta1/staker/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakerResponse {
    pub staker: Staker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staker {
    pub address: String,
}
