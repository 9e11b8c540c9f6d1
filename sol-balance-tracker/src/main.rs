use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use jsonrpsee::http_client::HttpClientBuilder;
use sol_prim::Address;
use sol_rpc::{
	calls::{GetGenesisHash, GetSlot},
	retrying::{Delays, Retrying},
	traits::CallApi,
	types::Commitment,
};
use sol_watch::tracker::{self, TrackerConfig};

const DEFAULT_API_URL: &str = "https://api.mainnet-beta.solana.com/";
const DEFAULT_TRACKED_ADDRESS: &str = "EfbbhahGNuhqEraRZXrwETfsaKxScngEttdQixWAW4WE";

#[derive(Debug, Parser)]
#[command(
	version,
	about = "Reports per-account SOL movement of the latest transactions touching an address"
)]
struct Opts {
	/// HTTP(S) url of the Solana RPC node to talk to.
	#[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
	api_url: String,

	/// The program (or wallet) address whose transactions to inspect.
	#[arg(long, env = "TRACKED_ADDRESS", default_value = DEFAULT_TRACKED_ADDRESS)]
	address: Address,

	/// How many of the most recent transactions to fetch.
	#[arg(long, default_value_t = 1)]
	limit: usize,

	/// Minimum spacing between consecutive node requests, in milliseconds.
	#[arg(long, default_value_t = 500)]
	delay_ms: u64,

	/// Commitment level the node should answer at.
	#[arg(long, default_value_t = Commitment::Confirmed)]
	commitment: Commitment,

	/// How many times to try each request before giving up on it.
	#[arg(long, default_value_t = 5)]
	attempts: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::FmtSubscriber::builder()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init()
		.expect("setting default subscriber failed");

	let opts = Opts::parse();
	if let Err(reason) = run(&opts).await {
		// Diagnostics only: a failed run must not flip the exit status.
		tracing::error!("run aborted: {:#}", reason);
	}
	Ok(())
}

async fn run(opts: &Opts) -> anyhow::Result<()> {
	let api = Retrying::new(
		HttpClientBuilder::default().build(&opts.api_url)?,
		Delays { attempts: opts.attempts, ..Delays::default() },
	);

	// One cheap call up front separates "cannot reach the node at all" from
	// per-transaction trouble further down.
	let genesis_hash = api
		.call(GetGenesisHash::default())
		.await
		.context("initializing the node connection")?;
	let slot = api.call(GetSlot::at_commitment(opts.commitment)).await?;
	tracing::info!("connected to {} (genesis {}, slot {})", opts.api_url, genesis_hash, slot);

	let report = tracker::track_address(
		&api,
		TrackerConfig {
			address: opts.address,
			transaction_limit: opts.limit,
			commitment: opts.commitment,
			request_delay: Duration::from_millis(opts.delay_ms),
		},
	)
	.await
	.context("obtaining the signature listing")?;

	tracing::info!(
		"fetched details for {} transaction(s) ({} with movement, {} missing, {} failed)",
		report.processed(),
		report.transferred(),
		report.missing(),
		report.failed(),
	);

	Ok(())
}
