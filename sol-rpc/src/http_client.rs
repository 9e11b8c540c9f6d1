use jsonrpsee::{core::client::ClientT, http_client::HttpClient};

use crate::{
	error::Error,
	traits::{Call, CallApi},
	types::JsValue,
};

#[async_trait::async_trait]
impl CallApi for HttpClient {
	type Error = Error;

	async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
		let raw: JsValue = self.request(C::CALL_METHOD_NAME, call.call_params()).await?;
		Ok(call.process_response(raw)?)
	}
}
