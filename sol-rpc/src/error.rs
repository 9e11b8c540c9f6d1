#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("transport: {0}")]
	Transport(#[from] jsonrpsee::core::ClientError),
	#[error("unexpected response shape: {0}")]
	UnexpectedResponse(#[from] serde_json::Error),
}
