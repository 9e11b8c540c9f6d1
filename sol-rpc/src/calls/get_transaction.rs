use jsonrpsee::rpc_params;
use serde_json::json;
use sol_prim::{Address, Amount, Digest, Signature, SlotNumber};

use super::GetTransaction;
use crate::{
	traits::Call,
	types::{Commitment, JsValue},
};

/// A transaction as returned by the node, with its execution metadata.
///
/// The node answers `null` for signatures it no longer (or does not yet) has
/// the detail for, hence the `Option` around this type in the call response.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
	pub slot: SlotNumber,
	pub block_time: Option<i64>,
	pub transaction: Transaction,
	pub meta: Option<TransactionMeta>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	pub signatures: Vec<Signature>,
	pub message: TransactionMessage,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
	pub account_keys: Vec<Address>,
	pub recent_blockhash: Digest,
}

/// Execution metadata: fee paid, error (if any), and the per-account balance
/// sheets captured before and after execution, index-aligned with
/// `message.accountKeys`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
	pub err: Option<JsValue>,
	pub fee: Amount,
	pub pre_balances: Vec<Amount>,
	pub post_balances: Vec<Amount>,
}

impl TransactionInfo {
	pub fn addresses(&self) -> impl Iterator<Item = &Address> {
		self.transaction.message.account_keys.iter()
	}

	/// The (pre, post) balance of a single account, if both the account and
	/// the execution metadata are present.
	pub fn balances(&self, address: &Address) -> Option<(Amount, Amount)> {
		let index = self.addresses().position(|key| key == address)?;
		let meta = self.meta.as_ref()?;
		Some((*meta.pre_balances.get(index)?, *meta.post_balances.get(index)?))
	}
}

impl GetTransaction {
	pub fn for_signature(signature: Signature) -> Self {
		Self { signature, commitment: Commitment::default(), max_supported_transaction_version: 0 }
	}

	pub fn commitment(self, commitment: Commitment) -> Self {
		Self { commitment, ..self }
	}
}

impl Call for GetTransaction {
	type Response = Option<TransactionInfo>;
	const CALL_METHOD_NAME: &'static str = "getTransaction";

	fn call_params(&self) -> jsonrpsee::core::params::ArrayParams {
		rpc_params![
			json!(self.signature),
			json!({
				"commitment": self.commitment,
				"maxSupportedTransactionVersion": self.max_supported_transaction_version,
				"encoding": "json",
			})
		]
	}
}
