use std::time::Duration;

use crate::traits::{Call, CallApi};

/// The backoff schedule of a [`Retrying`] api: how long to wait after each
/// failed attempt, doubling from `initial` up to `cap`, with `attempts`
/// attempts in total.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
	pub initial: Duration,
	pub cap: Duration,
	pub attempts: u32,
}

impl Default for Delays {
	fn default() -> Self {
		Self { initial: Duration::from_millis(250), cap: Duration::from_secs(5), attempts: 5 }
	}
}

impl Delays {
	pub fn schedule(&self) -> impl Iterator<Item = Duration> {
		let Self { initial, cap, attempts } = *self;
		(0..attempts.saturating_sub(1))
			.map(move |retry| std::cmp::min(cap, initial.saturating_mul(2u32.saturating_pow(retry))))
	}
}

/// Decorates a [`CallApi`] so that failed calls are re-issued according to a
/// [`Delays`] schedule before the error is given up on.
#[derive(Debug, Clone)]
pub struct Retrying<A> {
	api: A,
	delays: Delays,
}

impl<A> Retrying<A> {
	pub fn new(api: A, delays: Delays) -> Self {
		Self { api, delays }
	}
}

#[async_trait::async_trait]
impl<A> CallApi for Retrying<A>
where
	A: CallApi,
{
	type Error = A::Error;

	async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
		let mut schedule = self.delays.schedule();
		loop {
			match self.api.call(&call).await {
				Ok(response) => break Ok(response),
				Err(reason) => match schedule.next() {
					Some(delay) => {
						tracing::warn!(
							"{} failed ({}); retrying in {:?}",
							C::CALL_METHOD_NAME,
							reason,
							delay,
						);
						tokio::time::sleep(delay).await;
					},
					None => break Err(reason),
				},
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicU32, Ordering};

	use serde_json::json;

	use super::*;
	use crate::{calls::GetSlot, types::JsValue};

	#[derive(Debug, thiserror::Error)]
	#[error("transient failure")]
	struct Transient;

	/// Fails the first `failures` calls, then answers with `response`.
	struct FlakyApi {
		failures: u32,
		calls_seen: AtomicU32,
		response: JsValue,
	}

	#[async_trait::async_trait]
	impl CallApi for FlakyApi {
		type Error = Transient;

		async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
			if self.calls_seen.fetch_add(1, Ordering::Relaxed) < self.failures {
				return Err(Transient)
			}
			call.process_response(self.response.clone()).map_err(|_| Transient)
		}
	}

	#[test]
	fn schedule_is_capped_exponential() {
		let delays = Delays {
			initial: Duration::from_millis(250),
			cap: Duration::from_secs(1),
			attempts: 5,
		};
		assert_eq!(
			delays.schedule().collect::<Vec<_>>(),
			vec![
				Duration::from_millis(250),
				Duration::from_millis(500),
				Duration::from_secs(1),
				Duration::from_secs(1),
			]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn recovers_from_transient_failures() {
		let api = Retrying::new(
			FlakyApi { failures: 3, calls_seen: AtomicU32::new(0), response: json!(1234) },
			Delays::default(),
		);

		assert_eq!(api.call(GetSlot::default()).await.unwrap(), 1234);
	}

	#[tokio::test(start_paused = true)]
	async fn gives_up_once_the_schedule_is_exhausted() {
		let flaky = FlakyApi { failures: u32::MAX, calls_seen: AtomicU32::new(0), response: json!(0) };
		let api = Retrying::new(&flaky, Delays { attempts: 3, ..Delays::default() });

		assert!(api.call(GetSlot::default()).await.is_err());
		assert_eq!(flaky.calls_seen.load(Ordering::Relaxed), 3);
	}
}
