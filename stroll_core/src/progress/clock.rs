//! Time sources for the redraw throttle.
//!
//! The throttle never calls [`Instant::now`] directly; it asks a [`Clock`] that is
//! handed to the progress bar at construction. Production code uses [`SystemClock`],
//! tests use [`ManualClock`] to step time deterministically.

use parking_lot::Mutex;
use std::{
	sync::Arc,
	time::{Duration, Instant},
};

/// A source of "now" for throttling decisions.
pub trait Clock: Send + Sync {
	/// Returns the current instant.
	fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
	fn now(&self) -> Instant {
		(**self).now()
	}
}

/// The real monotonic wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// A clock that only moves when [`advance`](ManualClock::advance) is called.
#[derive(Debug)]
pub struct ManualClock {
	now: Mutex<Instant>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			now: Mutex::new(Instant::now()),
		}
	}

	/// Moves the clock forward by `by`.
	pub fn advance(&self, by: Duration) {
		*self.now.lock() += by;
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		*self.now.lock()
	}
}
