use std::time::Duration;

use sol_prim::{consts::LAMPORTS_PER_SOL, Address, Signature};
use sol_rpc::{
	calls::{GetSignaturesForAddress, GetTransaction},
	traits::CallApi,
	types::Commitment,
};

use crate::{
	deltas::{extract_deltas, BalanceDelta, ShapeMismatch},
	throttle::RequestGate,
};

#[derive(Debug, Clone, Copy)]
pub struct TrackerConfig {
	pub address: Address,
	pub transaction_limit: usize,
	pub commitment: Commitment,
	pub request_delay: Duration,
}

/// What happened to a single signature during a run.
#[derive(Debug)]
pub enum TxOutcome<E> {
	/// Detail fetched, deltas extracted (possibly none).
	Transferred(Vec<BalanceDelta>),
	/// The node knows the signature but (no longer) has the detail.
	NotFound,
	/// Fetching or processing this one transaction failed; the run moved on.
	Failed(TxError<E>),
}

#[derive(Debug, thiserror::Error)]
pub enum TxError<E> {
	#[error("fetching the transaction detail: {0}")]
	Fetch(E),
	#[error("the transaction carries no execution metadata")]
	MissingMeta,
	#[error(transparent)]
	BalanceShape(#[from] ShapeMismatch),
}

/// The per-signature outcomes of one tracking run, in processing order.
#[derive(Debug)]
pub struct RunReport<E> {
	pub outcomes: Vec<(Signature, TxOutcome<E>)>,
}

impl<E> Default for RunReport<E> {
	fn default() -> Self {
		Self { outcomes: Vec::new() }
	}
}

impl<E> RunReport<E> {
	pub fn processed(&self) -> usize {
		self.outcomes.len()
	}

	pub fn transferred(&self) -> usize {
		self.count(|outcome| matches!(outcome, TxOutcome::Transferred(_)))
	}

	pub fn missing(&self) -> usize {
		self.count(|outcome| matches!(outcome, TxOutcome::NotFound))
	}

	pub fn failed(&self) -> usize {
		self.count(|outcome| matches!(outcome, TxOutcome::Failed(_)))
	}

	fn count(&self, pred: impl Fn(&TxOutcome<E>) -> bool) -> usize {
		self.outcomes.iter().filter(|(_, outcome)| pred(outcome)).count()
	}
}

/// One tracking pass: list the most recent signatures touching `address`,
/// fetch each transaction's detail and derive the per-account balance deltas.
///
/// Individual transactions failing (or having gone missing) is recorded and
/// logged but does not stop the pass; only failing to obtain the signature
/// listing itself aborts it.
pub async fn track_address<A>(
	api: A,
	config: TrackerConfig,
) -> Result<RunReport<A::Error>, A::Error>
where
	A: CallApi,
{
	tracing::info!(
		"fetching the latest {} transaction(s) for {}",
		config.transaction_limit,
		config.address,
	);

	let signatures = api
		.call(
			GetSignaturesForAddress::for_address(config.address)
				.limit(config.transaction_limit)
				.commitment(config.commitment),
		)
		.await?;

	if signatures.is_empty() {
		tracing::info!("no transactions found for the given address");
		return Ok(RunReport::default())
	}

	tracing::info!("found {} transaction(s), fetching details", signatures.len());

	let mut gate = RequestGate::new(config.request_delay);
	let mut outcomes = Vec::with_capacity(signatures.len());

	for entry in signatures {
		gate.ready().await;

		let outcome = process_transaction(&api, entry.signature, config.commitment).await;
		match &outcome {
			TxOutcome::Transferred(deltas) =>
				for delta in deltas {
					tracing::info!(
						"account {} transferred: {} SOL",
						delta.account_index,
						delta.amount_transferred,
					);
				},
			TxOutcome::NotFound =>
				tracing::warn!("transaction not found for signature: {}", entry.signature),
			TxOutcome::Failed(reason) =>
				tracing::error!("failed to process transaction {}: {}", entry.signature, reason),
		}
		outcomes.push((entry.signature, outcome));
	}

	Ok(RunReport { outcomes })
}

async fn process_transaction<A>(
	api: A,
	signature: Signature,
	commitment: Commitment,
) -> TxOutcome<A::Error>
where
	A: CallApi,
{
	let info = match api
		.call(GetTransaction::for_signature(signature).commitment(commitment))
		.await
	{
		Ok(Some(info)) => info,
		Ok(None) => return TxOutcome::NotFound,
		Err(reason) => return TxOutcome::Failed(TxError::Fetch(reason)),
	};

	tracing::debug!("transaction {}: landed in slot {}", signature, info.slot);

	let Some(meta) = info.meta else { return TxOutcome::Failed(TxError::MissingMeta) };

	match extract_deltas(&meta.pre_balances, &meta.post_balances, LAMPORTS_PER_SOL) {
		Ok(deltas) => TxOutcome::Transferred(deltas),
		Err(mismatch) => TxOutcome::Failed(mismatch.into()),
	}
}
