use std::time::Duration;

use tokio::time::Instant;

use crate::throttle::RequestGate;

const PERIOD: Duration = Duration::from_millis(500);

#[tokio::test(start_paused = true)]
async fn the_first_pass_is_immediate() {
	let mut gate = RequestGate::new(PERIOD);

	let started = Instant::now();
	gate.ready().await;
	assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn subsequent_passes_are_spaced_by_the_period() {
	let mut gate = RequestGate::new(PERIOD);

	let started = Instant::now();
	for _ in 0..3 {
		gate.ready().await;
	}
	assert_eq!(started.elapsed(), PERIOD * 2);
}

#[tokio::test(start_paused = true)]
async fn a_missed_slot_shifts_the_schedule_instead_of_bursting() {
	let mut gate = RequestGate::new(PERIOD);
	gate.ready().await;

	// Hold the gate well past its next slot.
	tokio::time::sleep(PERIOD + Duration::from_millis(200)).await;

	let before = Instant::now();
	gate.ready().await;
	assert_eq!(before.elapsed(), Duration::ZERO);

	// The schedule restarts from the late pass rather than catching up.
	let before = Instant::now();
	gate.ready().await;
	assert_eq!(before.elapsed(), PERIOD);
}

#[tokio::test(start_paused = true)]
async fn a_zero_period_never_waits() {
	let mut gate = RequestGate::new(Duration::ZERO);

	let started = Instant::now();
	for _ in 0..10 {
		gate.ready().await;
	}
	assert_eq!(started.elapsed(), Duration::ZERO);
}
