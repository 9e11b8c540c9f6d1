use jsonrpsee::rpc_params;
use serde_json::json;
use sol_prim::{Address, Signature, SlotNumber};

use super::GetSignaturesForAddress;
use crate::{
	traits::Call,
	types::{Commitment, JsValue},
};

/// A single entry of the signature listing, newest first.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
	pub signature: Signature,
	pub slot: SlotNumber,
	pub err: Option<JsValue>,
	pub memo: Option<String>,
	pub block_time: Option<i64>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CallConfig<'a> {
	commitment: Commitment,
	#[serde(skip_serializing_if = "Option::is_none")]
	before: Option<&'a Signature>,
	#[serde(skip_serializing_if = "Option::is_none")]
	until: Option<&'a Signature>,
	#[serde(skip_serializing_if = "Option::is_none")]
	limit: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	min_context_slot: Option<SlotNumber>,
}

impl GetSignaturesForAddress {
	pub fn for_address(address: Address) -> Self {
		Self {
			address,
			before: None,
			until: None,
			commitment: Commitment::default(),
			limit: None,
			min_context_slot: None,
		}
	}

	pub fn commitment(self, commitment: Commitment) -> Self {
		Self { commitment, ..self }
	}

	pub fn limit(self, limit: usize) -> Self {
		Self { limit: Some(limit), ..self }
	}
}

impl Call for GetSignaturesForAddress {
	type Response = Vec<SignatureInfo>;
	const CALL_METHOD_NAME: &'static str = "getSignaturesForAddress";

	fn call_params(&self) -> jsonrpsee::core::params::ArrayParams {
		rpc_params![
			json!(self.address),
			json!(CallConfig {
				commitment: self.commitment,
				before: self.before.as_ref(),
				until: self.until.as_ref(),
				limit: self.limit,
				min_context_slot: self.min_context_slot,
			})
		]
	}
}
