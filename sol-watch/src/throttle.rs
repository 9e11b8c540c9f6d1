use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// A fixed-interval gate in front of an external rate limit.
///
/// The first [`ready`](Self::ready) resolves immediately; every subsequent
/// one waits until at least `period` has passed since the previous pass.
/// Runs on [`MissedTickBehavior::Delay`], so when one pass is held up longer
/// than the period the schedule shifts back instead of bursting to catch up.
pub struct RequestGate {
	interval: Option<Interval>,
}

impl RequestGate {
	pub fn new(period: Duration) -> Self {
		let interval = (period > Duration::ZERO).then(|| {
			let mut interval = interval_at(Instant::now(), period);
			interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
			interval
		});
		Self { interval }
	}

	pub async fn ready(&mut self) {
		if let Some(interval) = self.interval.as_mut() {
			interval.tick().await;
		}
	}
}
